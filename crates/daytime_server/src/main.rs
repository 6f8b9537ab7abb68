use std::process::ExitCode;

mod cli;
mod config;
mod core;
mod server;
mod utils;

use cli::Cli;
use utils::logging;

/// Daytime Server
///
/// Serves the NIST daytime line on TCP port 13, one client at a time.
///
/// The service is meant to run forever, so every way out of `main` reports
/// failure: startup errors, a fatal accept error, or an interrupt.
///
/// Usage: sudo RUST_LOG=info cargo run --bin daytime-server
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Cli::parse_config();

    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("Daytime Service {}", env!("CARGO_PKG_VERSION"));

    match server::run(config).await {
        Ok(()) => tracing::warn!("Daytime service stopped"),
        Err(e) => tracing::error!("Error running daytime service: {}", e),
    }

    ExitCode::FAILURE
}
