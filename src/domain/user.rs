use std::fmt;

use crate::domain::account::Account;

/// A registered person and the one account they own.
///
/// Passwords are stored and compared as plain text. This is a simulator: the
/// check exists to pick which account a session acts on, not to protect it.
pub struct User {
    name: String,
    password: String,
    account: Account,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            account: Account::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive comparison.
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("account", &self.account)
            .finish()
    }
}
