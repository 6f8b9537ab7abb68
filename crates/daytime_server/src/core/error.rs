use std::io;
use std::net::SocketAddr;

/// Custom error types for the daytime service
///
/// Startup variants (`Socket`, `Bind`, `Listen`, `Signal`) are always fatal.
/// `Accept` is fatal only under [`AcceptErrorPolicy::Exit`](crate::config::AcceptErrorPolicy).
#[derive(Debug, thiserror::Error)]
pub enum DaytimeError {
    #[error("Could not create listening socket: {source}")]
    Socket {
        #[source]
        source: io::Error,
    },
    #[error("Could not bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Could not listen on {addr}: {source}")]
    Listen {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("accept() failure: {source}")]
    Accept {
        #[source]
        source: io::Error,
    },
    #[error("Could not install shutdown signal handler: {source}")]
    Signal {
        #[source]
        source: io::Error,
    },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

pub type DaytimeResult<T> = Result<T, DaytimeError>;
