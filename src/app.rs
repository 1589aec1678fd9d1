use std::io::{BufRead, Write, stdin, stdout};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    common::{config::Settings, error::AppError},
    domain::directory::UserDirectory,
    io::{console::Console, reader, writer},
    worker::processor::{Flow, Processor},
};

/// Interactive in-memory banking ledger. Nothing is saved when it exits.
#[derive(Parser, Debug)]
#[command(name = "banking_ledger", version, about)]
pub struct Cli {
    /// Bank name shown in the welcome banner
    #[arg(long, default_value = "CashSource")]
    pub bank_name: String,

    /// Symbol printed in front of amounts
    #[arg(long, default_value = "$")]
    pub currency_symbol: String,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            bank_name: self.bank_name.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let cli = Cli::try_parse_from(args)?;

    init_logging(&cli.log_level)?;

    let stdin = stdin();
    let stdout = stdout();
    let directory = run_session(stdin.lock(), stdout.lock(), cli.settings())?;
    info!(users = directory.len(), "session ended");
    Ok(())
}

fn init_logging(default_filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Runs one interactive session until quit or end of input and returns the
/// directory as it stood at the end.
pub fn run_session<R, W>(input: R, output: W, settings: Settings) -> Result<UserDirectory, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut console = Console::new(input, output);
    let mut directory = UserDirectory::new();
    let mut processor = Processor::new(settings);

    writer::write_welcome(console.out(), processor.settings())?;

    loop {
        if processor.is_logged_in() {
            writer::write_menu(console.out())?;
        }
        console.out().flush()?;

        let command = match reader::read_command(&mut console, processor.is_logged_in()) {
            Ok(command) => command,
            Err(AppError::EndOfInput) => break,
            Err(e) => return Err(e),
        };

        match processor.process(&mut directory, command, &mut console) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(AppError::EndOfInput) => {
                debug!("input closed mid-command");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    console.out().flush()?;
    Ok(directory)
}
