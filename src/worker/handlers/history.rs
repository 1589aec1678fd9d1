use std::io::{BufRead, Write};

use crate::{
    common::{config::Settings, error::AppError},
    domain::user::User,
    io::{console::Console, writer::write_history},
};

pub fn handle<R: BufRead, W: Write>(
    user: &User,
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<(), AppError> {
    let history = user.account().transaction_history();
    write_history(console.out(), &history, settings)?;
    Ok(())
}
