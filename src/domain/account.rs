use chrono::{DateTime, Local};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::transaction::{Transaction, TxKind},
};

/// A balance plus the append-only log of transactions that produced it.
///
/// The account is the only place deposit and withdrawal rules are checked.
/// Every successful call appends exactly one [`Transaction`]; a rejected call
/// leaves both the balance and the log untouched.
#[derive(Debug, Clone, Default)]
pub struct Account {
    balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new() -> Self {
        Self {
            balance: Money::zero(),
            transactions: Vec::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money, description: &str) -> Result<&Transaction, LedgerError> {
        self.deposit_at(amount, description, Local::now())
    }

    pub fn deposit_at(
        &mut self,
        amount: Money,
        description: &str,
        at: DateTime<Local>,
    ) -> Result<&Transaction, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }

        let Some(balance) = self.balance.checked_add(amount) else {
            return Err(LedgerError::BalanceOverflow {
                amount,
                balance: self.balance,
            });
        };

        self.balance = balance;
        Ok(self.record(Transaction::new(at, amount, TxKind::Deposit, description)))
    }

    pub fn withdraw(&mut self, amount: Money, description: &str) -> Result<&Transaction, LedgerError> {
        self.withdraw_at(amount, description, Local::now())
    }

    pub fn withdraw_at(
        &mut self,
        amount: Money,
        description: &str,
        at: DateTime<Local>,
    ) -> Result<&Transaction, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        let Some(balance) = self
            .balance
            .checked_sub(amount)
            .filter(|b| *b >= Money::zero())
        else {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        };

        self.balance = balance;
        Ok(self.record(Transaction::new(at, amount, TxKind::Withdrawal, description)))
    }

    /// Transactions in the order they were recorded.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Most recent first. Transactions sharing a timestamp come back in
    /// reverse insertion order.
    pub fn transaction_history(&self) -> Vec<&Transaction> {
        let mut history: Vec<&Transaction> = self.transactions.iter().rev().collect();
        // stable sort keeps the reversed insertion order for equal timestamps
        history.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        history
    }

    fn record(&mut self, tx: Transaction) -> &Transaction {
        let index = self.transactions.len();
        self.transactions.push(tx);
        &self.transactions[index]
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::{Duration, TimeZone};

    use super::*;

    fn money(v: &str) -> Money {
        Money::from_str(v).unwrap()
    }

    fn at(secs: i64) -> DateTime<Local> {
        Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn new_account_is_empty() {
        let acc = Account::new();
        assert_eq!(acc.balance(), Money::zero());
        assert!(acc.transaction_history().is_empty());
    }

    #[test]
    fn deposit_increases_balance_and_records_tx() {
        let mut acc = Account::new();

        let tx = acc.deposit(money("100"), "paycheck").unwrap().clone();

        assert_eq!(acc.balance(), money("100"));
        assert_eq!(tx.kind(), TxKind::Deposit);
        assert_eq!(tx.amount(), money("100"));
        assert_eq!(tx.description(), "paycheck");
        assert_eq!(acc.transaction_history(), vec![&tx]);
    }

    #[test]
    fn withdraw_decreases_balance() {
        let mut acc = Account::new();
        acc.deposit(money("100"), "").unwrap();

        acc.withdraw(money("30"), "rent").unwrap();

        assert_eq!(acc.balance(), money("70"));
        let head = acc.transaction_history()[0];
        assert_eq!(head.kind(), TxKind::Withdrawal);
        assert_eq!(head.amount(), money("30"));
        assert_eq!(head.description(), "rent");
    }

    #[test]
    fn withdraw_entire_balance_is_allowed() {
        let mut acc = Account::new();
        acc.deposit(money("42.10"), "").unwrap();

        acc.withdraw(money("42.10"), "").unwrap();

        assert_eq!(acc.balance(), Money::zero());
        assert_eq!(acc.transactions().len(), 2);
    }

    #[test]
    fn non_positive_deposit_is_rejected_without_side_effects() {
        let mut acc = Account::new();
        acc.deposit(money("10"), "").unwrap();

        for amount in ["0", "-5"] {
            let err = acc.deposit(money(amount), "bad").unwrap_err();
            assert_eq!(err, LedgerError::NonPositiveAmount(money(amount)));
        }

        assert_eq!(acc.balance(), money("10"));
        assert_eq!(acc.transactions().len(), 1);
    }

    #[test]
    fn non_positive_withdrawal_is_rejected_without_side_effects() {
        let mut acc = Account::new();
        acc.deposit(money("10"), "").unwrap();

        let err = acc.withdraw(money("0"), "").unwrap_err();
        assert_eq!(err, LedgerError::NonPositiveAmount(Money::zero()));
        let err = acc.withdraw(money("-1"), "").unwrap_err();
        assert_eq!(err, LedgerError::NonPositiveAmount(money("-1")));

        assert_eq!(acc.balance(), money("10"));
        assert_eq!(acc.transactions().len(), 1);
    }

    #[test]
    fn overdraft_is_rejected_without_side_effects() {
        let mut acc = Account::new();

        let err = acc.withdraw(money("50"), "").unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                requested: money("50"),
                available: Money::zero(),
            }
        );
        assert_eq!(acc.balance(), Money::zero());
        assert!(acc.transaction_history().is_empty());
    }

    #[test]
    fn deposit_that_would_overflow_is_rejected_without_side_effects() {
        let mut acc = Account::new();
        let near_max = Money::new(i64::MAX / 100 * 60);
        acc.deposit(near_max, "first").unwrap();

        let err = acc.deposit(near_max, "second").unwrap_err();

        assert_eq!(
            err,
            LedgerError::BalanceOverflow {
                amount: near_max,
                balance: near_max,
            }
        );
        assert_eq!(acc.balance(), near_max);
        assert_eq!(acc.transactions().len(), 1);
        assert!(acc.balance() >= Money::zero());
    }

    #[test]
    fn balance_matches_log_for_mixed_sequence() {
        let mut acc = Account::new();
        let steps: [(bool, i64); 10] = [
            (true, 5000),
            (false, 2000),
            (false, 4000), // overdraft, rejected
            (true, 1),
            (false, 0), // rejected
            (true, -20), // rejected
            (false, 3001),
            (true, 999),
            (false, 1000), // overdraft, rejected
            (false, 1),
        ];

        for (is_deposit, cents) in steps {
            let amount = Money::new(cents);
            let _ = if is_deposit {
                acc.deposit(amount, "")
            } else {
                acc.withdraw(amount, "")
            };
            assert!(acc.balance() >= Money::zero(), "balance went negative");
            let from_log: Money = acc.transactions().iter().map(|t| t.signed_amount()).sum();
            assert_eq!(acc.balance(), from_log);
        }

        assert_eq!(acc.balance(), Money::new(5000 - 2000 + 1 - 3001 + 999 - 1));
        assert_eq!(acc.transactions().len(), 6);
    }

    #[test]
    fn history_is_newest_first() {
        let mut acc = Account::new();
        acc.deposit_at(money("1"), "first", at(0)).unwrap();
        acc.deposit_at(money("2"), "second", at(60)).unwrap();
        acc.withdraw_at(money("1"), "third", at(120)).unwrap();

        let descriptions: Vec<&str> = acc
            .transaction_history()
            .iter()
            .map(|t| t.description())
            .collect();
        assert_eq!(descriptions, ["third", "second", "first"]);
    }

    #[test]
    fn history_orders_by_timestamp_not_insertion() {
        let mut acc = Account::new();
        acc.deposit_at(money("1"), "late", at(0) + Duration::minutes(5)).unwrap();
        acc.deposit_at(money("1"), "early", at(0)).unwrap();

        let history = acc.transaction_history();
        assert_eq!(history[0].description(), "late");
        assert_eq!(history[1].description(), "early");
        // underlying log keeps insertion order
        assert_eq!(acc.transactions()[0].description(), "late");
    }

    #[test]
    fn history_ties_come_back_in_reverse_insertion_order() {
        let mut acc = Account::new();
        acc.deposit_at(money("1"), "t1", at(0)).unwrap();
        acc.deposit_at(money("2"), "t2", at(0)).unwrap();
        acc.withdraw_at(money("1"), "t3", at(0)).unwrap();

        let descriptions: Vec<&str> = acc
            .transaction_history()
            .iter()
            .map(|t| t.description())
            .collect();
        assert_eq!(descriptions, ["t3", "t2", "t1"]);
    }

    #[test]
    fn history_is_non_increasing_in_time() {
        let mut acc = Account::new();
        for (i, offset) in [30, 10, 10, 50, 0].into_iter().enumerate() {
            acc.deposit_at(Money::new(i as i64 + 1), "", at(offset)).unwrap();
        }

        let history = acc.transaction_history();
        assert!(history.windows(2).all(|w| w[0].timestamp() >= w[1].timestamp()));
        assert_eq!(history.len(), 5);
    }
}
