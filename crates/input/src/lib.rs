//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! never sees physical keys; swapping this crate for another mapper (gamepad,
//! replay file) leaves the game untouched.

pub mod map;

pub use tetris3d_types as types;

pub use map::{map_key, should_quit};
