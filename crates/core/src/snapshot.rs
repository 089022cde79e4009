//! Snapshot module - read-only per-frame view of the engine
//!
//! Renderers get an owned copy of everything they draw, so nothing they do
//! can reach back into engine state.

use serde::Serialize;

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{Dimensions, EngineState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Piece>,
    /// Layer the active piece would rest at after a hard drop.
    pub ghost_y: Option<i32>,
    pub next: Option<Piece>,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub state: EngineState,
    pub score: u32,
    pub high_score: u32,
    pub drop_interval_ms: u32,
    pub muted: bool,
}

impl GameSnapshot {
    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    pub fn playable(&self) -> bool {
        self.state == EngineState::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::default(),
            active: None,
            ghost_y: None,
            next: None,
            held: None,
            can_hold: true,
            state: EngineState::Menu,
            score: 0,
            high_score: 0,
            drop_interval_ms: crate::types::INITIAL_DROP_INTERVAL_MS,
            muted: false,
        }
    }
}
