use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    common::error::AppError,
    domain::directory::UserDirectory,
    io::{console::Console, writer::write_heading},
};

/// Prompts for credentials and returns the name of the user who logged in,
/// or `None` when the name is unknown or the password does not match.
pub fn handle<R: BufRead, W: Write>(
    directory: &UserDirectory,
    console: &mut Console<R, W>,
) -> Result<Option<String>, AppError> {
    write_heading(console.out(), "Login")?;
    let name = console.prompt(" Username: ")?;
    writeln!(console.out())?;

    let Some(user) = directory.find_by_name(&name) else {
        warn!(user = %name, "login for unknown user");
        writeln!(
            console.out(),
            "User {name} does not exist. Please enter [L] to log in again or [R] to register a new user."
        )?;
        return Ok(None);
    };

    let password = console.prompt(" Password: ")?;
    writeln!(console.out())?;

    if !user.check_password(&password) {
        warn!(user = %name, "login with wrong password");
        writeln!(
            console.out(),
            "Invalid password. Please enter [L] to log in again or [R] to register a new user."
        )?;
        return Ok(None);
    }

    info!(user = %name, "user logged in");
    writeln!(console.out(), "Welcome {name}")?;
    Ok(Some(name))
}
