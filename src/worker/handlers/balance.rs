use std::io::{BufRead, Write};

use crate::{
    common::{config::Settings, error::AppError},
    domain::user::User,
    io::{console::Console, writer::write_balance},
};

pub fn handle<R: BufRead, W: Write>(
    user: &User,
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<(), AppError> {
    write_balance(console.out(), user.account().balance(), settings)?;
    Ok(())
}
