use crate::common::money::Money;

/// Why an account refused to move money.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
    #[error("deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { amount: Money, balance: Money },
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("process error: {0}")]
    Process(String),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
    #[error("input closed")]
    EndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_error_messages_include_amounts() {
        let err = LedgerError::InsufficientFunds {
            requested: Money::new(5000),
            available: Money::new(1250),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: requested 50.00, available 12.50"
        );

        let err = LedgerError::BalanceOverflow {
            amount: Money::new(100),
            balance: Money::new(250),
        };
        assert_eq!(err.to_string(), "deposit of 1.00 would overflow balance 2.50");

        let err = LedgerError::NonPositiveAmount(Money::new(-100));
        assert_eq!(err.to_string(), "amount must be greater than zero (got -1.00)");
    }
}
