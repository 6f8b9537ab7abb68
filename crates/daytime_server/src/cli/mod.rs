use clap::Parser;

use crate::config::{AcceptErrorPolicy, Config};

/// Daytime Server
///
/// Serves the NIST daytime line on TCP port 13 to legacy clients. Each
/// connection receives one 51-byte message and is closed.
///
/// ## Message
/// ```text
/// JJJJJ YY-MM-DD HH:MM:SS TT 0 0  00.0 UTC(NIST) *
/// ```
/// - `JJJJJ`: Modified Julian Date
/// - `TT`: US daylight saving time code (00 standard, 50 daylight,
///   51/01 transition day, countdowns before each transition)
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "daytime-server")]
#[command(about = "A Daytime Protocol server emitting NIST-format timestamps")]
#[command(version)]
#[command(
    long_about = "Serves the NIST daytime line (MJD, UTC date and time, US DST transition code) on TCP port 13. \nClients are served one at a time; each receives a single 51-byte message before the connection is closed."
)]
pub struct Cli {
    /// Behavior when accepting a pending connection fails.
    #[arg(
        long,
        value_enum,
        default_value_t = AcceptErrorPolicy::Exit,
        value_name = "POLICY",
        long_help = "What to do when accepting a pending connection fails. \n`exit` terminates the service with a failure status; `continue` logs the failure and keeps serving."
    )]
    pub on_accept_error: AcceptErrorPolicy,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into_config()
    }

    fn into_config(self) -> Config {
        Config {
            accept_policy: self.on_accept_error,
            ..Config::default()
        }
    }
}
