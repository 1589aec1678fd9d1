//! An in-memory banking ledger simulator.
//!
//! Users register and log in, then deposit, withdraw and review their
//! transaction history from a line-oriented command loop. Nothing outlives
//! the process.
//!
//! ```
//! use banking_ledger::common::{error::LedgerError, money::Money};
//! use banking_ledger::domain::account::Account;
//!
//! let mut account = Account::new();
//! account.deposit(Money::new(10_000), "paycheck").unwrap();
//! account.withdraw(Money::new(3_000), "rent").unwrap();
//! assert_eq!(account.balance(), Money::new(7_000));
//!
//! let err = account.withdraw(Money::new(100_000), "car").unwrap_err();
//! assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
//! ```

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
