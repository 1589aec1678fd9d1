use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    common::{config::Settings, error::AppError},
    domain::user::User,
    io::{
        console::Console,
        reader::parse_amount,
        writer::{format_money, write_heading, write_rejection},
    },
};

pub fn handle<R: BufRead, W: Write>(
    user: &mut User,
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<(), AppError> {
    write_heading(console.out(), "Withdraw")?;
    let amount_text = console.prompt("Withdrawal amount: ")?;
    writeln!(console.out())?;
    let description = console.prompt("Description: ")?;
    writeln!(console.out())?;

    let amount = match parse_amount(&amount_text) {
        Ok(amount) => amount,
        Err(err) => {
            warn!(user = %user.name(), %err, "withdrawal not parsed");
            writeln!(console.out(), "Invalid amount. Please enter a positive number.")?;
            return Ok(());
        }
    };

    let result = user
        .account_mut()
        .withdraw(amount, &description)
        .map(|tx| tx.amount());

    match result {
        Ok(amount) => {
            let balance = user.account().balance();
            info!(user = %user.name(), %amount, %balance, "withdrawal recorded");
            writeln!(
                console.out(),
                "Withdraw successful. Your new balance is {}",
                format_money(balance, settings)
            )?;
        }
        Err(err) => {
            warn!(user = %user.name(), %err, "withdrawal rejected");
            write_rejection(console.out(), &err)?;
        }
    }
    Ok(())
}
