use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::{
    common::error::AppError,
    domain::{directory::UserDirectory, user::User},
    io::{console::Console, writer::write_heading},
};

/// Prompts for a new name and password and registers the user. Returns
/// whether a user was added.
pub fn handle<R: BufRead, W: Write>(
    directory: &mut UserDirectory,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    write_heading(console.out(), "Register")?;
    let name = console.prompt(" Username: ")?;
    writeln!(console.out())?;

    if name.trim().is_empty() {
        writeln!(
            console.out(),
            "Username cannot be empty. Please [R]egister with a different username."
        )?;
        return Ok(false);
    }

    if !directory.is_name_available(&name) {
        warn!(user = %name, "registration for taken name");
        writeln!(
            console.out(),
            "Username {name} already exists in our system. Please [L]ogin or [R]egister with a different username."
        )?;
        return Ok(false);
    }

    let password = console.prompt(" Password: ")?;
    writeln!(console.out())?;

    directory.register(User::new(name.as_str(), password));
    info!(user = %name, users = directory.len(), "user registered");
    writeln!(console.out(), "You have successfully registered. Please [L]ogin...")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::handlers::{output_of, test_console};

    #[test]
    fn registers_new_user_with_empty_account() {
        let mut dir = UserDirectory::new();
        let mut console = test_console("alice\npw1\n");

        assert!(handle(&mut dir, &mut console).unwrap());

        let alice = dir.find_by_name("alice").expect("alice registered");
        assert!(alice.check_password("pw1"));
        assert!(alice.account().transactions().is_empty());
        assert!(output_of(console).contains("You have successfully registered."));
    }

    #[test]
    fn duplicate_name_is_rejected_before_password_prompt() {
        let mut dir = UserDirectory::new();
        dir.register(User::new("alice", "pw1"));
        let mut console = test_console("alice\npw2\n");

        assert!(!handle(&mut dir, &mut console).unwrap());

        assert_eq!(dir.len(), 1);
        assert!(dir.find_by_name("alice").unwrap().check_password("pw1"));
        let out = output_of(console);
        assert!(out.contains("Username alice already exists"));
        assert!(!out.contains("Password:"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut dir = UserDirectory::new();
        let mut console = test_console("   \n");

        assert!(!handle(&mut dir, &mut console).unwrap());
        assert!(dir.is_empty());
    }

    #[test]
    fn names_differing_in_case_are_distinct() {
        let mut dir = UserDirectory::new();
        dir.register(User::new("alice", "pw1"));
        let mut console = test_console("Alice\npw2\n");

        assert!(handle(&mut dir, &mut console).unwrap());
        assert_eq!(dir.len(), 2);
    }
}
