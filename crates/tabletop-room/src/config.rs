//! Room configuration.

use serde::{Deserialize, Serialize};

use crate::BoardLayout;

/// Configuration shared by every room the registry creates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Seats per room.
    pub max_players: usize,

    /// Board dimensions used to place markers in a fresh room.
    pub layout: BoardLayout,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_players: 2,
            layout: BoardLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_config_default_seats_two() {
        let config = RoomConfig::default();
        assert_eq!(config.max_players, 2);
        assert_eq!(config.layout, BoardLayout::default());
    }
}
