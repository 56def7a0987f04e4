//! Error types for the room layer.

use tabletop_protocol::{ParticipantId, RoomId};

/// Errors that can occur during room operations.
///
/// Only membership changes can fail. Every board mutation validates its
/// own input and degrades to a no-op instead.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// Both seats are taken.
    #[error("room {0} is full")]
    RoomFull(RoomId),

    /// The participant is already seated in this room.
    #[error("participant {0} already in room {1}")]
    AlreadyInRoom(ParticipantId, RoomId),

    /// The participant is not seated in this room.
    #[error("participant {0} not in room {1}")]
    NotInRoom(ParticipantId, RoomId),
}
