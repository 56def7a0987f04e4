//! `TabletopServer` builder and accept loop.
//!
//! This is the entry point for running a Tabletop server. It ties
//! together all the layers: transport → protocol → gateway (sessions +
//! rooms).

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tabletop_protocol::JsonCodec;
use tabletop_room::{RoomConfig, RoomRegistry};
use tabletop_transport::{
    DEFAULT_HANDSHAKE_TIMEOUT, Transport, TransportError, WebSocketTransport,
};

use crate::gateway::spawn_gateway;
use crate::handler::handle_connection;
use crate::{GatewayHandle, TabletopError};

/// Default capacity of the gateway's command channel.
const DEFAULT_CHANNEL_SIZE: usize = 1024;

/// Builder for configuring and starting a Tabletop server.
///
/// # Example
///
/// ```rust,no_run
/// use tabletop::prelude::*;
///
/// # async fn start() -> Result<(), TabletopError> {
/// let server = TabletopServer::builder()
///     .bind("0.0.0.0:3000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct TabletopServerBuilder {
    bind_addr: String,
    room_config: RoomConfig,
    channel_size: usize,
    handshake_timeout: Duration,
}

impl TabletopServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            room_config: RoomConfig::default(),
            channel_size: DEFAULT_CHANNEL_SIZE,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the configuration every new room is built from.
    pub fn room_config(mut self, config: RoomConfig) -> Self {
        self.room_config = config;
        self
    }

    /// Sets how many commands may queue for the gateway before handlers
    /// wait.
    pub fn channel_size(mut self, size: usize) -> Self {
        self.channel_size = size.max(1);
        self
    }

    /// Sets how long a new socket may take to finish the WebSocket upgrade
    /// before it is dropped.
    pub fn handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Binds the listener and starts the gateway.
    ///
    /// Uses `JsonCodec` and `WebSocketTransport`, which is what browser
    /// clients speak.
    pub async fn build(self) -> Result<TabletopServer, TabletopError> {
        let transport = WebSocketTransport::bind(&self.bind_addr)
            .await?
            .with_handshake_timeout(self.handshake_timeout);
        let gateway = spawn_gateway(RoomRegistry::new(self.room_config), self.channel_size);

        Ok(TabletopServer {
            transport,
            gateway,
            codec: JsonCodec,
        })
    }
}

impl Default for TabletopServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Tabletop server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct TabletopServer {
    transport: WebSocketTransport,
    gateway: GatewayHandle,
    codec: JsonCodec,
}

impl TabletopServer {
    /// Creates a new builder.
    pub fn builder() -> TabletopServerBuilder {
        TabletopServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Returns a handle to the gateway, e.g. to inspect live rooms.
    pub fn handle(&self) -> GatewayHandle {
        self.gateway.clone()
    }

    /// Runs the accept loop until the process is terminated.
    pub async fn run(self) -> Result<(), TabletopError> {
        self.run_until(std::future::pending()).await
    }

    /// Runs the accept loop until `shutdown` completes, then stops
    /// accepting and stops the gateway.
    ///
    /// Each accepted socket is upgraded and handled in its own task, so a
    /// slow or silent peer never holds up the loop.
    pub async fn run_until<F>(mut self, shutdown: F) -> Result<(), TabletopError>
    where
        F: Future<Output = ()>,
    {
        tracing::info!(addr = ?self.local_addr().ok(), "Tabletop server running");
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("shutdown requested");
                    break;
                }
                accepted = self.transport.accept() => match accepted {
                    Ok(pending) => {
                        let gateway = self.gateway.clone();
                        let codec = self.codec;
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(pending, gateway, codec).await {
                                tracing::debug!(error = %e, "connection ended with error");
                            }
                        });
                    }
                    Err(TransportError::Shutdown) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "accept failed");
                    }
                },
            }
        }

        self.transport.shutdown().await?;
        self.gateway.shutdown().await?;
        Ok(())
    }
}
