use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use clap::ValueEnum;

use crate::core::utils::{BACKLOG, PORT};

/// What the serving loop does when `accept` fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AcceptErrorPolicy {
    /// Stop serving and exit with a failure status
    #[default]
    Exit,
    /// Log the failure and wait for the next connection
    Continue,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub backlog: u32,
    pub accept_policy: AcceptErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, PORT)),
            backlog: BACKLOG,
            accept_policy: AcceptErrorPolicy::default(),
        }
    }
}
