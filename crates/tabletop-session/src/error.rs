//! Error types for the session layer.

use tabletop_protocol::RoomId;
use tabletop_transport::ConnectionId;

/// Errors that can occur during session management.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No session exists for the connection. Either it never registered
    /// or it has already disconnected.
    #[error("session not found for {0}")]
    NotFound(ConnectionId),

    /// The connection is already seated in a room. A binding is fixed for
    /// the lifetime of the connection.
    #[error("{0} is already bound to room {1}")]
    AlreadyBound(ConnectionId, RoomId),

    /// The connection registered twice.
    #[error("{0} already has a session")]
    AlreadyConnected(ConnectionId),
}
