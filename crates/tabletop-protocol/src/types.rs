//! Core protocol types for Tabletop's wire format.
//!
//! Everything in this module travels "on the wire": it is serialized to
//! JSON, sent over a WebSocket, and parsed by the browser client (or the
//! other way round).
//!
//! Both directions share one envelope shape, a named event plus an
//! optional payload:
//!
//! ```text
//! { "event": "play-card", "data": { "card": "07", "x": 100, "y": 150 } }
//! { "event": "draw-card" }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix that puts a card token in the special-deck namespace.
pub const SPECIAL_PREFIX: &str = "glads/";

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The key a room is addressed by. Chosen by the client, so any string.
///
/// `#[serde(transparent)]` makes `RoomId("R1")` travel as plain `"R1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one participant of a room. Assigned by the server when a
/// connection is registered; clients only ever see it in `hand-counts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// Which deck a card token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKind {
    /// Tokens `"01"` through `"54"`.
    Main,
    /// Tokens `"glads/01"` through `"glads/10"`.
    Special,
}

/// An opaque card token, e.g. `"07"` or `"glads/03"`.
///
/// The server never interprets a token beyond its namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardToken(pub String);

impl CardToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the token lives in the special-deck namespace.
    pub fn is_special(&self) -> bool {
        self.0.starts_with(SPECIAL_PREFIX)
    }

    /// The deck this token is returned to.
    pub fn deck(&self) -> DeckKind {
        if self.is_special() {
            DeckKind::Special
        } else {
            DeckKind::Main
        }
    }
}

impl From<&str> for CardToken {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card lying face up on the shared table.
///
/// Its position in the table sequence is the index that move and return
/// events address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: CardToken,
    pub x: f64,
    pub y: f64,
}

/// How many cards one participant holds. Broadcast instead of the hand
/// itself so hands stay private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCount {
    pub id: ParticipantId,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// The three kinds of positional markers on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Dot,
    Hex,
    Square,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dot => write!(f, "dot"),
            Self::Hex => write!(f, "hex"),
            Self::Square => write!(f, "square"),
        }
    }
}

/// A dot marker: position only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
}

/// A hexagon or square marker: position plus a counter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuedMarker {
    pub x: f64,
    pub y: f64,
    pub value: i64,
}

// ---------------------------------------------------------------------------
// Room listing
// ---------------------------------------------------------------------------

/// A summary of a room returned in room listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomListEntry {
    pub room_id: RoomId,
    /// Number of participants currently seated.
    pub player_count: usize,
    /// Seats in the room.
    pub max_players: usize,
    /// `true` once every seat is taken.
    pub full: bool,
}

// ---------------------------------------------------------------------------
// Recipient — who should receive an outbound event?
// ---------------------------------------------------------------------------

/// The audience of a server event.
///
/// Every room operation returns `(Recipient, ServerEvent)` pairs, so who
/// hears about a change is decided where the change is made and the
/// gateway only has to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Every participant currently in the room.
    All,
    /// One participant only.
    Participant(ParticipantId),
}

// ---------------------------------------------------------------------------
// ClientEvent — inbound
// ---------------------------------------------------------------------------

/// Everything a client can ask of the server.
///
/// `#[serde(tag = "event", content = "data")]` gives the adjacently tagged
/// shape shown in the module docs, and `rename_all = "kebab-case"` turns
/// `PlayCard` into `"play-card"`. Events without a payload omit `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Sit down in the named room, creating it if nobody is there.
    JoinRoom(RoomId),
    /// Take the top card of the main deck into your hand.
    DrawCard,
    ShuffleMainDeck,
    ShuffleSpecialDeck,
    /// Put a card from your hand on the table at `(x, y)`.
    PlayCard { card: CardToken, x: f64, y: f64 },
    MoveTableCard { index: usize, x: f64, y: f64 },
    /// Put a card from your hand back into its deck.
    ReturnCardFromHand { card: CardToken },
    /// Put a table card back into its deck. `card` must still match the
    /// card at `index`.
    ReturnCardFromTable { index: usize, card: CardToken },
    /// Pick a table card up into your hand. Same guard as above.
    ReturnCardFromTableToHand { index: usize, card: CardToken },
    MoveDot { index: usize, x: f64, y: f64 },
    MoveHex { index: usize, x: f64, y: f64 },
    UpdateHex { index: usize, value: i64 },
    MoveSquare { index: usize, x: f64, y: f64 },
    UpdateSquare { index: usize, value: i64 },
    /// Ask for the list of open rooms.
    ListRooms,
}

impl ClientEvent {
    /// The wire name of this event, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom(_) => "join-room",
            Self::DrawCard => "draw-card",
            Self::ShuffleMainDeck => "shuffle-main-deck",
            Self::ShuffleSpecialDeck => "shuffle-special-deck",
            Self::PlayCard { .. } => "play-card",
            Self::MoveTableCard { .. } => "move-table-card",
            Self::ReturnCardFromHand { .. } => "return-card-from-hand",
            Self::ReturnCardFromTable { .. } => "return-card-from-table",
            Self::ReturnCardFromTableToHand { .. } => "return-card-from-table-to-hand",
            Self::MoveDot { .. } => "move-dot",
            Self::MoveHex { .. } => "move-hex",
            Self::UpdateHex { .. } => "update-hex",
            Self::MoveSquare { .. } => "move-square",
            Self::UpdateSquare { .. } => "update-square",
            Self::ListRooms => "list-rooms",
        }
    }
}

// ---------------------------------------------------------------------------
// ServerEvent — outbound
// ---------------------------------------------------------------------------

/// Everything the server pushes to clients. Same envelope as
/// [`ClientEvent`]. Updates always carry the full array, never a diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Join accepted; carries the number of seated participants.
    Joined(usize),
    /// The receiving participant's own hand.
    YourHand(Vec<CardToken>),
    TableUpdate(Vec<PlacedCard>),
    DotsUpdate(Vec<Dot>),
    HexesUpdate(Vec<ValuedMarker>),
    SquaresUpdate(Vec<ValuedMarker>),
    /// Hand sizes of every seated participant, in seat order.
    HandCounts(Vec<HandCount>),
    /// Join rejected: both seats are taken.
    RoomFull,
    RoomList(Vec<RoomListEntry>),
}

// =========================================================================
// Tests
// =========================================================================
