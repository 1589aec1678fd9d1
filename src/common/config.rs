/// Presentation settings for a session, filled from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bank_name: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bank_name: "CashSource".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}
