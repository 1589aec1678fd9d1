use chrono::{DateTime, Local};
use std::fmt;

use crate::common::money::Money;

/// One balance-changing event. Only `Account` creates these, and nothing
/// hands out mutable access once they are in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    timestamp: DateTime<Local>,
    amount: Money,
    kind: TxKind,
    description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => f.write_str("deposit"),
            TxKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

impl Transaction {
    pub(crate) fn new(
        timestamp: DateTime<Local>,
        amount: Money,
        kind: TxKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            amount,
            kind,
            description: description.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount as it affects the balance: negative for withdrawals.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TxKind::Deposit => self.amount,
            TxKind::Withdrawal => Money::zero() - self.amount,
        }
    }
}
