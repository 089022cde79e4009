//! Core types module - shared data structures and constants
//!
//! Plain data shared by the engine, the input mapper and the terminal frontend.
//! Nothing here performs I/O; every type is cheap to copy or clone.
//!
//! # Coordinates
//!
//! The playfield is a voxel pit addressed as `(x, y, z)`:
//!
//! - **x**: column, `0..width` (left to right)
//! - **y**: layer, `0..height` (bottom to top; pieces fall towards `y = 0`)
//! - **z**: row, `0..depth` (back to front)
//!
//! Storage order everywhere is layer, then row, then column.
//!
//! # Timing and scoring constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DROP_INTERVAL_MS` | 1200 | Gravity interval at score 0 |
//! | `MIN_DROP_INTERVAL_MS` | 100 | Gravity floor |
//! | `POINTS_PER_LAYER` | 100 | Score per cleared layer |
//! | `SPEEDUP_SCORE_STEP` | 500 | Score needed for one speed step |
//! | `SPEEDUP_INTERVAL_STEP_MS` | 100 | Interval reduction per speed step |
//! | `FRAME_MS` | 16 | Target frame time of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tetris3d_types::{Axis, Dimensions, GameAction, SoundEvent};
//!
//! let dims = Dimensions::CLASSIC;
//! assert_eq!(dims.cell_count(), 10 * 20 * 10);
//!
//! assert_eq!(Axis::from_str("y"), Some(Axis::Y));
//! assert_eq!(SoundEvent::Line.as_str(), "line");
//!
//! let action = GameAction::Rotate { axis: Axis::Z, clockwise: false };
//! assert!(action.is_intent());
//! ```

use serde::{Deserialize, Serialize};

/// Gravity interval at the start of a game.
pub const INITIAL_DROP_INTERVAL_MS: u32 = 1200;

/// Gravity never gets faster than this.
pub const MIN_DROP_INTERVAL_MS: u32 = 100;

/// Points awarded for each cleared layer.
pub const POINTS_PER_LAYER: u32 = 100;

/// Score span that shortens the drop interval by one step.
pub const SPEEDUP_SCORE_STEP: u32 = 500;

/// Drop interval reduction per speed step.
pub const SPEEDUP_INTERVAL_STEP_MS: u32 = 100;

/// Target frame time of the terminal loop (~60 FPS).
pub const FRAME_MS: u32 = 16;

/// 24-bit RGB color identifier, e.g. `0x00ffff`.
pub type ColorId = u32;

/// A cell of the pit
///
/// - `None`: empty
/// - `Some(color)`: locked voxel of the given color
pub type Cell = Option<ColorId>;

/// Rotation axis of a polycube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Rotates the Y-Z plane (pitch).
    X,
    /// Rotates the X-Z plane (yaw).
    Y,
    /// Rotates the X-Y plane (roll).
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Parse an axis name (case-insensitive).
    ///
    /// ```
    /// use tetris3d_types::Axis;
    ///
    /// assert_eq!(Axis::from_str("X"), Some(Axis::X));
    /// assert_eq!(Axis::from_str("w"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Extents of the pit, fixed for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u8,
    pub height: u8,
    pub depth: u8,
}

impl Dimensions {
    /// Default pit: 10 wide, 20 tall, 10 deep.
    pub const CLASSIC: Dimensions = Dimensions::new(10, 20, 10);

    pub const SMALL: Dimensions = Dimensions::new(6, 14, 6);

    pub const LARGE: Dimensions = Dimensions::new(14, 24, 14);

    pub const fn new(width: u8, height: u8, depth: u8) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Number of cells in one layer (depth x width).
    pub fn layer_len(&self) -> usize {
        self.depth as usize * self.width as usize
    }

    /// Total number of cells in the pit.
    pub fn cell_count(&self) -> usize {
        self.layer_len() * self.height as usize
    }

    /// Parse a preset name: `small`, `classic` or `large`.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "small" => Some(Self::SMALL),
            "classic" => Some(Self::CLASSIC),
            "large" => Some(Self::LARGE),
            _ => None,
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Lifecycle of the engine.
///
/// `Menu` is the initial state; `GameOver` is reached only when a freshly
/// spawned piece overlaps the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl EngineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Menu => "menu",
            EngineState::Playing => "playing",
            EngineState::Paused => "paused",
            EngineState::GameOver => "game_over",
        }
    }
}

/// Actions that drive the engine
///
/// The first five variants are the gameplay intents produced by an input
/// mapper; they are ignored outside `Playing`. The rest drive the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Shift along the width axis by the given delta.
    MoveX(i8),
    /// Shift along the depth axis by the given delta.
    MoveZ(i8),
    /// Rotate 90 degrees about an axis.
    Rotate { axis: Axis, clockwise: bool },
    /// Drop to the resting height and lock.
    HardDrop,
    /// Swap with the hold slot (once per piece).
    Hold,
    /// Start a new game from the menu or after game over.
    Start,
    /// Playing <-> Paused.
    TogglePause,
    /// Flip the sound mute flag.
    ToggleMute,
    /// Leave a paused or finished game for the menu.
    Menu,
}

impl GameAction {
    /// True for gameplay intents (accepted only while playing).
    pub fn is_intent(&self) -> bool {
        matches!(
            self,
            GameAction::MoveX(_)
                | GameAction::MoveZ(_)
                | GameAction::Rotate { .. }
                | GameAction::HardDrop
                | GameAction::Hold
        )
    }
}

/// Named sound triggers fired by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEvent {
    Move,
    Rotate,
    Drop,
    Line,
    GameOver,
}

impl SoundEvent {
    pub const ALL: [SoundEvent; 5] = [
        SoundEvent::Move,
        SoundEvent::Rotate,
        SoundEvent::Drop,
        SoundEvent::Line,
        SoundEvent::GameOver,
    ];

    /// Fixed trigger name understood by sound backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Move => "move",
            SoundEvent::Rotate => "rotate",
            SoundEvent::Drop => "drop",
            SoundEvent::Line => "line",
            SoundEvent::GameOver => "gameover",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        SoundEvent::ALL.into_iter().find(|ev| ev.as_str() == s)
    }
}

/// Notifications the engine queues for its caller
///
/// Drained once per frame with `Engine::take_events`; replaces callback
/// fields for score, next piece and game over notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    StateChanged { from: EngineState, to: EngineState },
    ScoreChanged { score: u32, high_score: u32 },
    /// A piece was promoted to active and a new next piece was drawn.
    NextPiece,
    PieceLocked { lines_cleared: u32 },
    Held,
    GameOver { score: u32 },
}

/// Name of the looping menu track; stopped when sound is muted.
pub const MENU_TRACK: &str = "menu";
