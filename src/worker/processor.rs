use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    common::{command::Command, config::Settings, error::AppError},
    domain::{directory::UserDirectory, user::User},
    io::{console::Console, writer},
    worker::handlers::{balance, deposit, history, login, register, statement, withdrawal},
};

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Dispatches commands and tracks who is logged in.
///
/// The directory is not owned here; the session driver passes it in for every
/// command.
#[derive(Debug, Default)]
pub struct Processor {
    settings: Settings,
    active_user: Option<String>,
}
impl Processor {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            active_user: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn active_user(&self) -> Option<&str> {
        self.active_user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.active_user.is_some()
    }

    pub fn process<R: BufRead, W: Write>(
        &mut self,
        directory: &mut UserDirectory,
        command: Command,
        console: &mut Console<R, W>,
    ) -> Result<Flow, AppError> {
        debug!(
            command = command.name(),
            user = self.active_user.as_deref(),
            "dispatching command"
        );

        match command {
            Command::Login => {
                if let Some(name) = login::handle(directory, console)? {
                    self.active_user = Some(name);
                }
            }
            Command::Register => {
                register::handle(directory, console)?;
            }
            Command::Balance => {
                if let Some(user) = self.current_user(directory, console)? {
                    balance::handle(user, console, &self.settings)?;
                }
            }
            Command::Deposit => {
                if let Some(user) = self.current_user(directory, console)? {
                    deposit::handle(user, console, &self.settings)?;
                }
            }
            Command::Withdraw => {
                if let Some(user) = self.current_user(directory, console)? {
                    withdrawal::handle(user, console, &self.settings)?;
                }
            }
            Command::History => {
                if let Some(user) = self.current_user(directory, console)? {
                    history::handle(user, console, &self.settings)?;
                }
            }
            Command::Statement => {
                if let Some(user) = self.current_user(directory, console)? {
                    statement::handle(user, console)?;
                }
            }
            Command::Logout => {
                if let Some(name) = self.active_user.take() {
                    debug!(user = %name, "user logged out");
                }
                writer::write_welcome(console.out(), &self.settings)?;
            }
            Command::Help => {
                writer::write_help(console.out(), self.is_logged_in())?;
            }
            Command::Quit => {
                writeln!(console.out(), "Goodbye.")?;
                return Ok(Flow::Quit);
            }
            Command::Unknown(input) => {
                writer::write_invalid_command(console.out(), &input)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Resolves the logged-in user, telling the console when nobody is.
    fn current_user<'a, R: BufRead, W: Write>(
        &self,
        directory: &'a mut UserDirectory,
        console: &mut Console<R, W>,
    ) -> Result<Option<&'a mut User>, AppError> {
        let Some(name) = self.active_user.as_deref() else {
            writeln!(console.out())?;
            writeln!(console.out(), "Please [L]ogin first.")?;
            return Ok(None);
        };
        directory
            .find_by_name_mut(name)
            .map(Some)
            .ok_or_else(|| AppError::Process(format!("logged-in user {name} is not in the directory")))
    }
}
