//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for playing the voxel pit in a
//! terminal. It avoids widget toolkits and renders into a simple framebuffer
//! that is diffed and flushed through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Show a 3D pit on a 2D grid (top view plus front elevation)
//! - Provide the engine's `Renderer` and `SoundEffects` ports for a terminal

pub mod fb;
pub mod frontend;
pub mod pit_view;
pub mod renderer;
pub mod sound;

pub use tetris3d_core as core;
pub use tetris3d_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frontend::TerminalFrontend;
pub use pit_view::{layer_color, PitLayout, PitView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sound::BellSound;
