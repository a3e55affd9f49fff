//! Snake in the terminal
//!
//! The `game` module is pure logic with no I/O; `render`, `input`, and
//! `audio` wrap the presentation side; `modes` ties them together into the
//! interactive play loop.

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
