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
    write_heading(console.out(), "Deposit")?;
    let amount_text = console.prompt("Deposit amount: ")?;
    writeln!(console.out())?;
    let description = console.prompt("Description: ")?;
    writeln!(console.out())?;

    let amount = match parse_amount(&amount_text) {
        Ok(amount) => amount,
        Err(err) => {
            warn!(user = %user.name(), %err, "deposit not parsed");
            writeln!(console.out(), "Invalid amount. Please enter a positive number.")?;
            return Ok(());
        }
    };

    // the account decides; nothing is validated here
    let result = user
        .account_mut()
        .deposit(amount, &description)
        .map(|tx| tx.amount());

    match result {
        Ok(amount) => {
            let balance = user.account().balance();
            info!(user = %user.name(), %amount, %balance, "deposit recorded");
            writeln!(
                console.out(),
                "Deposit successful. Your new balance is {}",
                format_money(balance, settings)
            )?;
        }
        Err(err) => {
            warn!(user = %user.name(), %err, "deposit rejected");
            write_rejection(console.out(), &err)?;
        }
    }
    Ok(())
}
