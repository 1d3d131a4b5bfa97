//! helix - Helix HR assistant demo CLI
//!
//! Every invocation behaves like one page load: the persisted session is
//! hydrated, the command runs, and the result is printed.
//!
//! # Examples
//!
//! ```bash
//! helix login --email hr@helix.com
//! helix view --tab queries
//! helix login --email alice@company.com
//! helix chat "What is the remote work policy?" --rate up
//! helix logout
//! ```

use helix_cli::{App, Cli, CliResult, initialize_logger, report};
use helix_config::Config;
use helix_session::{FileStorage, SessionStore};

use std::io;
use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match report(result, &mut io::stdout(), &mut io::stderr()) {
        Ok(true) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    initialize_logger(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let storage = FileStorage::new(config.storage_dir()?);
    let store = SessionStore::new(storage)
        .with_key(config.storage.key.clone())
        .with_hr_email(config.auth.hr_email.clone());

    let mut app = App::start(store, cli.pretty);
    app.execute(cli.command)
}
