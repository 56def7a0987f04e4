//! Board state and room lifecycle for Tabletop.
//!
//! # Key types
//!
//! - [`Room`] — one room's authoritative board and its state machine
//! - [`RoomRegistry`] — creates rooms on first join, drops them when empty
//! - [`RoomConfig`] / [`BoardLayout`] — seats and marker geometry
//! - [`deck`] — deck construction and the Fisher–Yates shuffle

pub mod deck;

mod config;
mod error;
mod layout;
mod registry;
mod room;

pub use config::RoomConfig;
pub use error::RoomError;
pub use layout::BoardLayout;
pub use registry::RoomRegistry;
pub use room::{Outbound, Room};
