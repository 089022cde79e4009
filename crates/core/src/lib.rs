//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic
//! of the 3D falling-block puzzle. It has no dependencies on terminals, files or
//! audio: everything outside the rules is reached through the traits in [`ports`].
//!
//! - **Deterministic**: the same seed (or scripted source) produces identical games
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any frontend that can draw a [`GameSnapshot`] can host it
//!
//! # Module Structure
//!
//! - [`board`]: voxel pit with collision detection and layer clearing
//! - [`shape`]: polycube occupancy masks and 90 degree rotation about X, Y and Z
//! - [`pieces`]: the fixed piece catalog and the falling piece
//! - [`rng`]: injectable random source for piece selection
//! - [`scoring`]: layer-clear points and gravity speed-up
//! - [`clock`]: frame timestamp to elapsed time conversion
//! - [`engine`]: the Menu / Playing / Paused / GameOver state machine
//! - [`ports`]: sound, storage and renderer interfaces
//! - [`snapshot`]: read-only per-frame view handed to renderers
//!
//! # Game Rules
//!
//! - A new piece spawns centered with its top layer at the ceiling; if it
//!   overlaps the stack the game is over
//! - Pieces move along X and Z, rotate about any axis and never kick off walls
//! - Gravity moves the piece one layer down per drop interval; a piece that
//!   cannot fall locks
//! - Every completely filled layer is removed and scores 100 points; the
//!   interval shrinks by 100ms per 500 points down to 100ms
//! - Hold swaps the active piece once per spawn
//!
//! # Example
//!
//! ```
//! use tetris3d_core::Engine;
//! use tetris3d_core::types::{Dimensions, EngineState, GameAction};
//!
//! let mut engine = Engine::new(12345);
//! engine.start(Dimensions::CLASSIC);
//!
//! engine.apply_action(GameAction::MoveX(1));
//! engine.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(engine.state(), EngineState::Playing);
//! assert!(engine.board().occupied_count() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`Engine::frame`](engine::Engine::frame) every frame with a monotonic
//! timestamp, or [`Engine::update`](engine::Engine::update) with elapsed time.

pub mod board;
pub mod clock;
pub mod engine;
pub mod pieces;
pub mod ports;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tetris3d_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::FrameClock;
pub use engine::Engine;
pub use pieces::{Piece, PieceDef, CATALOG};
pub use ports::{MemoryStore, NoSound, Persistence, Renderer, SoundEffects};
pub use rng::{RandomSource, ScriptedSource, SimpleRng};
pub use scoring::{drop_interval_for_score, line_clear_points};
pub use shape::{Shape, ShapeError};
pub use snapshot::GameSnapshot;
