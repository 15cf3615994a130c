// pynew - Python project scaffolder
// Main CLI entry point

use clap::Parser;
use std::process;
use pynew::cli::{Cli, CliDispatcher};
use pynew::utils::error::UserError;
use pynew::utils::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::initialize(cli.verbose);

    let result = CliDispatcher::execute(cli).await;

    if let Err(err) = result {
        tracing::debug!(error = ?err, "run failed");
        let user_error = UserError::from_setup_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
