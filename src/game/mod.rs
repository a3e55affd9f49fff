//! Core game logic for Snake
//!
//! Everything in here is free of I/O and timing: one `GameEngine::step` call
//! is one move, and the caller decides when moves happen.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepResult};
pub use state::{CollisionType, GameState, Point, Snake};
