//! Contact Book - main entry point.

use std::io;

use anyhow::Result;
use contact_book::repl::Repl;
use contact_book::store::AddressBook;
use contact_book::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr only; stdout belongs to the REPL.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("starting contact book session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(AddressBook::new(), stdin.lock(), stdout.lock());
    repl.run()?;

    Ok(())
}
