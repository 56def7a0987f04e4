//! Wire protocol for Tabletop.
//!
//! This crate defines the "language" that board clients and the server
//! speak:
//!
//! - **Types** ([`ClientEvent`], [`ServerEvent`], [`CardToken`], markers,
//!   ids) — the structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those structures are
//!   converted to and from text frames.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while doing so.
//!
//! The protocol layer knows nothing about connections or rooms.
//!
//! ```text
//! Transport (text frames) → Protocol (events) → Gateway (rooms, sessions)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    CardToken, ClientEvent, DeckKind, Dot, HandCount, MarkerKind, ParticipantId, PlacedCard,
    Recipient, RoomId, RoomListEntry, SPECIAL_PREFIX, ServerEvent, ValuedMarker,
};
