//! Session bindings for Tabletop.
//!
//! Every accepted connection gets a [`Session`]: a random participant
//! identity plus, once a join succeeds, the room it is seated in. The
//! gateway looks bindings up here instead of capturing them in handler
//! state.
//!
//! # How it fits in the stack
//!
//! ```text
//! Gateway (above)  ← resolves connection → (room, participant) per event
//!     ↕
//! Session Layer (this crate)
//!     ↕
//! Protocol / Transport (below)  ← ParticipantId, RoomId, ConnectionId
//! ```

mod error;
mod manager;
mod session;

pub use error::SessionError;
pub use manager::SessionManager;
pub use session::{Session, SessionState};
