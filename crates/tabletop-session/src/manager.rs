//! The session manager: tracks every live connection and its binding.
//!
//! # Concurrency note
//!
//! `SessionManager` is a plain pair of `HashMap`s with no locking. It is
//! owned by the gateway task, which handles one event at a time, so no
//! two updates can interleave.

use std::collections::HashMap;

use rand::Rng;
use rand::distr::Alphanumeric;
use tabletop_protocol::{ParticipantId, RoomId};
use tabletop_transport::ConnectionId;

use crate::{Session, SessionError, SessionState};

/// Length of generated participant ids.
const PARTICIPANT_ID_LEN: usize = 20;

/// Registry of sessions, keyed by connection.
///
/// ## Lifecycle
///
/// ```text
/// connect() ──→ [Lobby] ──bind()──→ [Seated] ──disconnect()──→ (gone)
///                  │                                  ↑
///                  └──────────disconnect()────────────┘
/// ```
pub struct SessionManager {
    sessions: HashMap<ConnectionId, Session>,

    /// Reverse index used to deliver events addressed to a participant.
    /// Kept in sync with `sessions`.
    participants: HashMap<ParticipantId, ConnectionId>,
}

impl SessionManager {
    /// Creates an empty session manager.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            participants: HashMap::new(),
        }
    }

    /// Registers a new connection and gives it a participant identity.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyConnected`] if the connection is
    /// already registered.
    pub fn connect(&mut self, connection: ConnectionId) -> Result<&Session, SessionError> {
        if self.sessions.contains_key(&connection) {
            return Err(SessionError::AlreadyConnected(connection));
        }

        let participant = loop {
            let candidate = generate_participant_id();
            if !self.participants.contains_key(&candidate) {
                break candidate;
            }
        };

        tracing::debug!(%connection, %participant, "session opened");
        self.participants.insert(participant.clone(), connection);
        let session = self.sessions.entry(connection).or_insert(Session {
            connection,
            participant,
            state: SessionState::Lobby,
        });
        Ok(session)
    }

    /// Seats a connection in a room. Call only after the room accepted the
    /// join.
    ///
    /// # Errors
    /// - [`SessionError::NotFound`] — the connection isn't registered
    /// - [`SessionError::AlreadyBound`] — it is already seated somewhere
    pub fn bind(
        &mut self,
        connection: ConnectionId,
        room_id: RoomId,
    ) -> Result<&Session, SessionError> {
        let session = self
            .sessions
            .get_mut(&connection)
            .ok_or(SessionError::NotFound(connection))?;

        if let SessionState::Seated { room_id: current } = &session.state {
            return Err(SessionError::AlreadyBound(connection, current.clone()));
        }

        tracing::debug!(%connection, %room_id, "session bound");
        session.state = SessionState::Seated { room_id };
        Ok(session)
    }

    /// Looks up a session by connection.
    pub fn get(&self, connection: &ConnectionId) -> Option<&Session> {
        self.sessions.get(connection)
    }

    /// The `(room, participant)` pair a connection acts as, or `None`
    /// if it hasn't joined a room (or is gone).
    pub fn binding(&self, connection: &ConnectionId) -> Option<(&RoomId, &ParticipantId)> {
        let session = self.sessions.get(connection)?;
        Some((session.room_id()?, &session.participant))
    }

    /// The connection a participant is reachable on.
    pub fn connection_of(&self, participant: &ParticipantId) -> Option<ConnectionId> {
        self.participants.get(participant).copied()
    }

    /// Forgets a connection. Returns the session so the caller can clean
    /// up the room it was seated in.
    ///
    /// # Errors
    /// Returns [`SessionError::NotFound`] if there was no session.
    pub fn disconnect(&mut self, connection: ConnectionId) -> Result<Session, SessionError> {
        let session = self
            .sessions
            .remove(&connection)
            .ok_or(SessionError::NotFound(connection))?;
        self.participants.remove(&session.participant);
        tracing::debug!(%connection, participant = %session.participant, "session closed");
        Ok(session)
    }

    /// Returns the number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if there are no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a random alphanumeric participant id.
fn generate_participant_id() -> ParticipantId {
    let id: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(PARTICIPANT_ID_LEN)
        .map(char::from)
        .collect();
    ParticipantId(id)
}

// =========================================================================
// Tests
// =========================================================================
