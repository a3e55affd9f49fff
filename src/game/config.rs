use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// Coordinates are in pixels; the playfield is `width` x `height` and every
/// position is a multiple of `block_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Edge length of one grid cell in pixels
    pub block_size: i32,
    /// Interval between moves at game start, in milliseconds
    pub initial_speed_ms: u64,
    /// How much the move interval shrinks per food eaten
    pub speed_step_ms: u64,
    /// Lower bound on the move interval
    pub min_speed_ms: u64,
    /// Score awarded per food eaten
    pub food_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            block_size: 20,
            initial_speed_ms: 150,
            speed_step_ms: 5,
            min_speed_ms: 50,
            food_score: 10,
        }
    }
}

impl GameConfig {
    /// Number of grid columns
    pub fn grid_width(&self) -> i32 {
        self.width / self.block_size
    }

    /// Number of grid rows
    pub fn grid_height(&self) -> i32 {
        self.height / self.block_size
    }

    /// A small playfield for tests
    pub fn small() -> Self {
        Self {
            width: 200,
            height: 200,
            ..Default::default()
        }
    }
}
