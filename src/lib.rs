pub mod catalog;
pub mod cli;
pub mod config;
pub mod eligibility;
pub mod filtering;
pub mod models;
pub mod resolver;
pub mod session;
pub mod validation;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. Logs go to stderr so command
/// output on stdout stays clean. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
