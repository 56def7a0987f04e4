//! # Tabletop
//!
//! Real-time shared card table for two-player rooms.
//!
//! Clients connect over WebSocket, join a room by name, and from then on
//! every action on the board (drawing, playing and moving cards, moving
//! markers, editing marker values) is applied by the server and pushed
//! to both participants. The server holds the only copy of the board.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabletop::prelude::*;
//!
//! # async fn start() -> Result<(), TabletopError> {
//! let server = TabletopServer::builder()
//!     .bind("127.0.0.1:3000")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod gateway;
mod handler;
mod server;

pub use error::TabletopError;
pub use gateway::{ConnectionSender, GatewayHandle};
pub use server::{TabletopServer, TabletopServerBuilder};

/// Everything needed to run a server and talk its protocol.
pub mod prelude {
    pub use crate::{GatewayHandle, TabletopError, TabletopServer, TabletopServerBuilder};
    pub use tabletop_protocol::{
        CardToken, ClientEvent, Codec, Dot, HandCount, JsonCodec, ParticipantId, PlacedCard,
        RoomId, RoomListEntry, ServerEvent, ValuedMarker,
    };
    pub use tabletop_room::{BoardLayout, RoomConfig};
}
