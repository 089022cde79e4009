//! Terminal 3D falling-block puzzle (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `tetris3d::{core,input,term,types}` and adds the pieces only the
//! binary needs: command line parsing and the high-score file.

pub mod cli;
pub mod persist;

pub use tetris3d_core as core;
pub use tetris3d_input as input;
pub use tetris3d_term as term;
pub use tetris3d_types as types;
