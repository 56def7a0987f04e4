//! Unified error type for the Tabletop server.

use tabletop_protocol::ProtocolError;
use tabletop_room::RoomError;
use tabletop_session::SessionError;
use tabletop_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `tabletop` crate you deal with this single error type
/// instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant generates the `From` impls, so `?` converts
/// sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum TabletopError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (unknown or doubly bound connection).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A room-level error (full, not seated).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The gateway task has stopped and no longer takes commands.
    #[error("gateway is not running")]
    GatewayClosed,
}
