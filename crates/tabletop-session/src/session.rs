//! Session types: the server's record of one connection.
//!
//! A session answers two questions about a connection:
//! - WHO is behind it (`ParticipantId`, assigned on connect)
//! - WHERE they sit (`SessionState`, fixed by the first successful join)

use tabletop_protocol::{ParticipantId, RoomId};
use tabletop_transport::ConnectionId;

/// Where a connection currently stands.
///
/// ```text
///   Lobby ──(join accepted)──→ Seated
/// ```
///
/// There is no way back: leaving a room means closing the connection.
/// A rejected join (room full) keeps the session in the lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Connected but not in any room yet. Board events are dropped.
    Lobby,

    /// Bound to a room for the rest of the connection's life.
    Seated { room_id: RoomId },
}

/// One connection's session.
#[derive(Debug, Clone)]
pub struct Session {
    /// The transport connection this session belongs to.
    pub connection: ConnectionId,

    /// Identity used inside rooms and in `hand-counts`. Random, so it
    /// reveals nothing about the connection.
    pub participant: ParticipantId,

    pub state: SessionState,
}

impl Session {
    /// The room this session is seated in, if any.
    pub fn room_id(&self) -> Option<&RoomId> {
        match &self.state {
            SessionState::Lobby => None,
            SessionState::Seated { room_id } => Some(room_id),
        }
    }
}
