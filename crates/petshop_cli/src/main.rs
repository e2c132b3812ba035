//! CLI demo entry point.
//!
//! # Responsibility
//! - Run the customer lifecycle demo against the in-memory or SQLite
//!   repository.
//! - Print controller notices as the operator-facing status lines.

use clap::Parser;
use petshop_core::db::{open_db, DbError};
use petshop_core::{
    default_log_level, init_logging, ControllerError, CustomerController, CustomerRepository,
    CustomerValidator, InMemoryCustomerRepository, LoggingError, RepoError,
    SqliteCustomerRepository,
};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Pet shop customer registry demo
#[derive(Parser)]
#[command(name = "petshop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file; the in-memory repository is used when omitted
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); needs --log-dir
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
}

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
    Controller(ControllerError),
    Io(std::io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Controller(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ControllerError> for CliError {
    fn from(value: ControllerError) -> Self {
        Self::Controller(value)
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("petshop: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let mut out = std::io::stdout().lock();
    match cli.db {
        Some(path) => {
            let conn = open_db(&path)?;
            let repo = SqliteCustomerRepository::try_new(&conn)?;
            run_demo(repo, &mut out)
        }
        None => run_demo(InMemoryCustomerRepository::new(), &mut out),
    }
}

fn run_demo<R: CustomerRepository, W: Write>(repo: R, out: &mut W) -> Result<(), CliError> {
    let mut controller = CustomerController::new(CustomerValidator::new(), repo);

    writeln!(
        out,
        "{}",
        controller.create_customer("João", "joao@email.com", "(11) 99999-9999")?
    )?;
    write_lookup(&controller, "João", out)?;
    writeln!(
        out,
        "{}",
        controller.update_customer("João", "novoemail@email.com", "(11) 88888-8888")?
    )?;
    write_lookup(&controller, "João", out)?;
    writeln!(out, "{}", controller.delete_customer("João")?)?;
    write_lookup(&controller, "João", out)?;

    Ok(())
}

fn write_lookup<R: CustomerRepository, W: Write>(
    controller: &CustomerController<R>,
    name: &str,
    out: &mut W,
) -> Result<(), CliError> {
    match controller.read_customer(name)? {
        Some(customer) => writeln!(
            out,
            "Customer: {}, {}, {}",
            customer.name, customer.email, customer.phone
        )?,
        None => writeln!(out, "Customer not found")?,
    }
    Ok(())
}
