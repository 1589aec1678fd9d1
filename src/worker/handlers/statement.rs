use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    common::error::AppError,
    domain::user::User,
    io::{console::Console, writer::write_statement},
};

/// Writes the user's history as CSV to the session output.
pub fn handle<R: BufRead, W: Write>(user: &User, console: &mut Console<R, W>) -> Result<(), AppError> {
    let history = user.account().transaction_history();
    debug!(user = %user.name(), rows = history.len(), "writing statement");
    write_statement(console.out(), &history)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::money::Money,
        worker::handlers::{output_of, test_console},
    };

    #[test]
    fn writes_header_and_one_row_per_transaction() {
        let mut user = User::new("alice", "pw");
        user.account_mut().deposit(Money::new(10_000), "paycheck").unwrap();
        user.account_mut().withdraw(Money::new(2_550), "groceries").unwrap();
        let mut console = test_console("");

        handle(&user, &mut console).unwrap();

        let out = output_of(console);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "timestamp,kind,amount,description");
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| l.ends_with(",withdrawal,25.50,groceries")));
        assert!(lines.iter().any(|l| l.ends_with(",deposit,100.00,paycheck")));
    }
}
