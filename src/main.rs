use std::process::ExitCode;

use clap::Parser;
use docselect_lib::cli::{self, CommandLine};
use docselect_lib::config;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse();
    docselect_lib::init_tracing();
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    match cli::run(commands).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "docselect failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
