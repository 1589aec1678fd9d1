use std::io::{self, Write};

use crate::{
    common::{config::Settings, error::LedgerError, money::Money},
    domain::transaction::{Transaction, TxKind},
};

const RULE_WIDTH: usize = 49;

pub fn write_welcome<W: Write>(w: &mut W, settings: &Settings) -> io::Result<()> {
    writeln!(
        w,
        "Welcome to {}, the alternate source for online banking! Please [L]ogin or [R]egister...",
        settings.bank_name
    )
}

pub fn write_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "Would you like to: View Account [B]alance, Make a [D]eposit, Make a [W]ithdrawal, \
         View [T]ransaction History, Print a [S]tatement, or [L]ogout?"
    )
}

/// Writes `| title |` underlined to the same width.
pub fn write_heading<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let heading = format!("| {title} |");
    writeln!(w, "{heading}")?;
    writeln!(w, "{}", "-".repeat(heading.chars().count()))?;
    writeln!(w)
}

pub fn write_help<W: Write>(w: &mut W, logged_in: bool) -> io::Result<()> {
    write_heading(w, "Available Commands")?;
    let lines: &[&str] = if logged_in {
        &[
            " [B]alance - View Account Balance",
            " [D]eposit - Make a deposit",
            " [W]ithdrawal - Make a withdrawal",
            " [T]ransactions - View transaction history",
            " [S]tatement - Print transaction history as CSV",
            " [H]elp - View available commands",
            " [L]ogout",
            " [Q]uit",
        ]
    } else {
        &[" [L]ogin", " [R]egister", " [H]elp", " [Q]uit"]
    };
    writeln!(w, "{}", lines.join("\n\n"))
}

pub fn write_invalid_command<W: Write>(w: &mut W, input: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(
        w,
        "{input} is not a valid command. Type [H]elp to view available commands."
    )
}

pub fn format_money(amount: Money, settings: &Settings) -> String {
    if amount < Money::zero() {
        format!("-{}{}", settings.currency_symbol, Money::zero() - amount)
    } else {
        format!("{}{}", settings.currency_symbol, amount)
    }
}

/// Explains why the account refused a deposit or withdrawal.
pub fn write_rejection<W: Write>(w: &mut W, err: &LedgerError) -> io::Result<()> {
    match err {
        LedgerError::NonPositiveAmount(_) => {
            writeln!(w, "Invalid amount. Please enter a positive number.")
        }
        LedgerError::InsufficientFunds { .. } => {
            writeln!(w, "Withdraw amount is greater than current balance.")
        }
        LedgerError::BalanceOverflow { .. } => {
            writeln!(w, "Deposit amount is too large for this account.")
        }
    }
}

pub fn write_balance<W: Write>(w: &mut W, balance: Money, settings: &Settings) -> io::Result<()> {
    write_heading(w, "Account Balance")?;
    writeln!(w, "Your balance is {}", format_money(balance, settings))
}

/// Writes one line per transaction in the order given, deposits prefixed
/// with `+` and withdrawals with `-`.
pub fn write_history<W: Write>(
    w: &mut W,
    history: &[&Transaction],
    settings: &Settings,
) -> io::Result<()> {
    let title = format!("{:^width$}", "Transaction History", width = RULE_WIDTH - 4);
    writeln!(w, "| {title} |")?;
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;

    if history.is_empty() {
        return writeln!(w, " No transactions yet.");
    }

    for tx in history {
        let sign = match tx.kind() {
            TxKind::Deposit => '+',
            TxKind::Withdrawal => '-',
        };
        writeln!(
            w,
            " {} | {}{} | {}",
            tx.timestamp().format("%Y-%m-%d - %H:%M"),
            sign,
            format_money(tx.amount(), settings),
            tx.description()
        )?;
        writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
    }
    Ok(())
}

#[derive(serde::Serialize)]
/// One CSV statement line. Headers: `timestamp,kind,amount,description`.
struct StatementRow {
    timestamp: String,
    kind: String,
    amount: String,
    description: String,
}

/// Writes transactions as CSV in the order given.
///
/// Timestamps are RFC 3339, amounts have exactly two decimals and no currency
/// symbol. The header row is written even when there are no transactions.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use banking_ledger::common::money::Money;
/// use banking_ledger::domain::account::Account;
/// use banking_ledger::io::writer::write_statement;
///
/// let mut account = Account::new();
/// account.deposit(Money::new(10_000), "paycheck").unwrap();
///
/// let mut out = Vec::new();
/// write_statement(&mut out, &account.transaction_history()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("timestamp,kind,amount,description\n"));
/// assert!(s.contains(",deposit,100.00,paycheck\n"));
/// ```
pub fn write_statement<W: Write>(writer: W, history: &[&Transaction]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["timestamp", "kind", "amount", "description"])?;
    for tx in history {
        let row = StatementRow {
            timestamp: tx.timestamp().to_rfc3339(),
            kind: tx.kind().to_string(),
            amount: tx.amount().to_string_2dp(),
            description: tx.description().to_string(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
