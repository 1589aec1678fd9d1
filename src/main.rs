use std::process::ExitCode;

use banking_ledger::{app, common::error::AppError};

fn main() -> ExitCode {
    match app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
