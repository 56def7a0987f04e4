//! Per-connection handler: registration, frame decoding, and delivery.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Finish the WebSocket upgrade (bounded by the handshake timeout)
//!   2. Register with the gateway → get a participant id and an outbox
//!   3. Spawn a writer that drains the outbox onto the socket
//!   4. Loop: receive frames → decode `ClientEvent` → forward to the gateway
//!   5. On close, tell the gateway so the seat is vacated

use std::sync::Arc;

use tabletop_protocol::{ClientEvent, Codec, ServerEvent};
use tabletop_transport::{
    Connection, ConnectionId, Handshake, WebSocketConnection, WebSocketHandshake,
};
use tokio::sync::mpsc;

use crate::{GatewayHandle, TabletopError};

/// Drop guard that disconnects the connection when the handler exits.
///
/// This ensures the seat is vacated even if the handler panics. Since
/// `Drop` is synchronous, we spawn a fire-and-forget task for the send.
struct DisconnectGuard {
    connection: ConnectionId,
    gateway: GatewayHandle,
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        let connection = self.connection;
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            let _ = gateway.disconnect(connection).await;
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C>(
    pending: WebSocketHandshake,
    gateway: GatewayHandle,
    codec: C,
) -> Result<(), TabletopError>
where
    C: Codec + Clone,
{
    let conn = Arc::new(pending.complete().await?);
    let conn_id = conn.id();
    tracing::debug!(%conn_id, peer = %conn.peer_addr(), "handling new connection");

    let (outbox, inbox) = mpsc::unbounded_channel();
    let participant = gateway.connect(conn_id, outbox).await?;
    let _guard = DisconnectGuard {
        connection: conn_id,
        gateway: gateway.clone(),
    };
    tracing::info!(%conn_id, %participant, "client connected");

    // The writer ends when the gateway drops the outbox on disconnect.
    tokio::spawn(write_loop(Arc::clone(&conn), inbox, codec.clone()));

    loop {
        let text = match conn.recv().await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!(%conn_id, %participant, "client disconnected");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                break;
            }
        };

        let event: ClientEvent = match codec.decode(&text) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "failed to decode event");
                continue;
            }
        };
        tracing::trace!(%conn_id, event = event.name(), "event received");

        gateway.event(conn_id, event).await?;
    }

    // _guard drops here → disconnect fires.
    Ok(())
}

/// Encodes outbound events and writes them to the socket in order.
async fn write_loop<C: Codec>(
    conn: Arc<WebSocketConnection>,
    mut inbox: mpsc::UnboundedReceiver<ServerEvent>,
    codec: C,
) {
    let conn_id = conn.id();
    while let Some(event) = inbox.recv().await {
        let text = match codec.encode(&event) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(%conn_id, error = %e, "failed to encode event");
                continue;
            }
        };
        if let Err(e) = conn.send(&text).await {
            tracing::debug!(%conn_id, error = %e, "send failed, writer stopping");
            break;
        }
    }
}
