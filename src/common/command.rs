/// A session command, chosen by the first character of an input line.
///
/// `L` is overloaded: it logs in from the anonymous state and logs out once a
/// user is active, so parsing needs to know which state the session is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login,
    Register,
    Balance,
    Deposit,
    Withdraw,
    History,
    Statement,
    Logout,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str, logged_in: bool) -> Self {
        let key = input
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase());

        match (key, logged_in) {
            (Some('H'), _) => Command::Help,
            (Some('Q'), _) => Command::Quit,
            (Some('L'), false) => Command::Login,
            (Some('R'), false) => Command::Register,
            (Some('L'), true) => Command::Logout,
            (Some('B'), true) => Command::Balance,
            (Some('D'), true) => Command::Deposit,
            (Some('W'), true) => Command::Withdraw,
            (Some('T'), true) => Command::History,
            (Some('S'), true) => Command::Statement,
            _ => Command::Unknown(input.to_string()),
        }
    }

    /// Short label for logs. Never includes the raw input of an unknown
    /// command, which may be a mistyped password.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login => "login",
            Command::Register => "register",
            Command::Balance => "balance",
            Command::Deposit => "deposit",
            Command::Withdraw => "withdraw",
            Command::History => "history",
            Command::Statement => "statement",
            Command::Logout => "logout",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Unknown(_) => "unknown",
        }
    }
}
