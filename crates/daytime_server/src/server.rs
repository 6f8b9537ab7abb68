use std::future::Future;
use std::io;
use std::net::SocketAddr;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::task::JoinError;

use crate::config::{AcceptErrorPolicy, Config};
use crate::core::{
    error::{DaytimeError, DaytimeResult},
    provider::DaytimeFormatter,
};

/// Daytime Protocol server
///
/// Owns the listening socket. Connections are served one at a time: accept,
/// write one message, shut down, close. Dropping the server releases the
/// listener.
#[derive(Debug)]
pub struct DaytimeServer {
    listener: TcpListener,
    formatter: DaytimeFormatter,
    accept_policy: AcceptErrorPolicy,
}

impl DaytimeServer {
    /// Create, bind and listen on the configured endpoint
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(config: &Config) -> DaytimeResult<Self> {
        let addr = config.listen_addr;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(|source| DaytimeError::Socket { source })?;

        socket
            .set_reuseaddr(true)
            .map_err(|source| DaytimeError::Socket { source })?;
        socket
            .bind(addr)
            .map_err(|source| DaytimeError::Bind { addr, source })?;
        let listener = socket
            .listen(config.backlog)
            .map_err(|source| DaytimeError::Listen { addr, source })?;

        Ok(Self {
            listener,
            formatter: DaytimeFormatter::new(),
            accept_policy: config.accept_policy,
        })
    }

    pub fn local_addr(&self) -> DaytimeResult<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|source| DaytimeError::Socket { source })
    }

    /// Serve connections until `shutdown` resolves
    ///
    /// A connection already accepted is always served to completion before
    /// shutdown is observed.
    pub async fn run_until<F>(self, shutdown: F) -> DaytimeResult<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let accepted = tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, releasing listener");
                    return Ok(());
                }
                accepted = self.listener.accept() => accepted,
            };

            self.handle_accepted(accepted).await?;
        }
    }

    /// Serve one accept result, applying the accept-error policy to failures
    pub(crate) async fn handle_accepted(
        &self,
        accepted: io::Result<(TcpStream, SocketAddr)>,
    ) -> DaytimeResult<()> {
        match accepted {
            Ok((stream, peer)) => {
                self.serve_connection(stream, peer).await;
                Ok(())
            }
            Err(source) => match self.accept_policy {
                AcceptErrorPolicy::Exit => Err(DaytimeError::Accept { source }),
                AcceptErrorPolicy::Continue => {
                    tracing::warn!("accept() failure, continuing: {}", source);
                    Ok(())
                }
            },
        }
    }

    async fn serve_connection(&self, mut stream: TcpStream, peer: SocketAddr) {
        tracing::info!("Connection from host {}, port {}", peer.ip(), peer.port());

        let message = self.formatter.current_message();
        match stream.write(message.as_bytes()).await {
            Ok(sent) if sent == message.len() => {
                tracing::debug!("Sent {:?} to {}", message.as_str(), peer);
            }
            Ok(sent) => {
                tracing::warn!(
                    "Sent {} instead of {} characters in reply to {}",
                    sent,
                    message.len(),
                    peer
                );
            }
            Err(e) => {
                tracing::warn!("Failed to send daytime message to {}: {}", peer, e);
            }
        }

        if let Err(e) = stream.shutdown().await {
            tracing::warn!("Socket error on shutdown for {}: {}", peer, e);
        }
    }
}

/// Bind the configured endpoint and serve until interrupted
pub async fn run(config: Config) -> DaytimeResult<()> {
    let server = DaytimeServer::bind(&config)?;
    tracing::info!(
        "Daytime service listening on {} (backlog {})",
        server.local_addr()?,
        config.backlog
    );

    let (signal_tx, signal_rx) = tokio::sync::oneshot::channel();
    let signal = tokio::spawn(async move {
        let result = tokio::signal::ctrl_c().await;
        let _ = signal_tx.send(());
        result
    });

    server
        .run_until(async {
            let _ = signal_rx.await;
        })
        .await?;

    signal_outcome(signal.await)
}

/// Map the result of the signal-listening task to the service result
fn signal_outcome(joined: Result<io::Result<()>, JoinError>) -> DaytimeResult<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(source)) => Err(DaytimeError::Signal { source }),
        Err(e) => Err(DaytimeError::Signal {
            source: io::Error::other(e),
        }),
    }
}
