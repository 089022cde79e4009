//! Engine module - the game state machine
//!
//! Ties the board, the pieces, scoring and the ports together. The engine is
//! the only owner of mutable game state; callers drive it with actions and
//! elapsed time and read it back through snapshots and queued events.
//!
//! Every intent (move, rotate, hard drop, hold) is ignored unless the engine
//! is `Playing`. Moves and rotations build a candidate first and commit only
//! when it does not collide, so a rejected intent leaves no trace.

use std::fmt;
use std::mem;

use tracing::{debug, info};

use crate::board::Board;
use crate::clock::FrameClock;
use crate::pieces::Piece;
use crate::ports::{MemoryStore, NoSound, Persistence, Renderer, SoundEffects};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{drop_interval_for_score, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Axis, Dimensions, EngineState, GameAction, GameEvent, SoundEvent, INITIAL_DROP_INTERVAL_MS,
    MENU_TRACK,
};

/// Complete game state plus the ports it reports to
pub struct Engine {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    held: Option<Piece>,
    can_hold: bool,
    score: u32,
    high_score: u32,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    state: EngineState,
    clock: FrameClock,
    events: Vec<GameEvent>,
    rng: Box<dyn RandomSource>,
    sound: Box<dyn SoundEffects>,
    store: Box<dyn Persistence>,
}

impl Engine {
    /// Headless engine: seeded LCG, silent sound, in-memory high score.
    pub fn new(seed: u32) -> Self {
        Self::with_ports(
            Box::new(SimpleRng::new(seed)),
            Box::new(NoSound::default()),
            Box::new(MemoryStore::default()),
        )
    }

    /// Engine wired to the given random source, sound and storage.
    ///
    /// The stored high score is loaded once here; the first next piece is
    /// drawn immediately so the menu can already preview it.
    pub fn with_ports(
        mut rng: Box<dyn RandomSource>,
        sound: Box<dyn SoundEffects>,
        mut store: Box<dyn Persistence>,
    ) -> Self {
        let high_score = store.load();
        let next = Piece::random(rng.as_mut());

        Self {
            board: Board::default(),
            active: None,
            next,
            held: None,
            can_hold: true,
            score: 0,
            high_score,
            drop_interval_ms: INITIAL_DROP_INTERVAL_MS,
            drop_timer_ms: 0,
            state: EngineState::Menu,
            clock: FrameClock::new(),
            events: Vec::new(),
            rng,
            sound,
            store,
        }
    }

    /// Replace the (empty) board with one of the given extents.
    pub fn with_dimensions(mut self, dims: Dimensions) -> Self {
        self.board = Board::new(dims);
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Milliseconds accumulated towards the next gravity step.
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn is_muted(&self) -> bool {
        self.sound.is_muted()
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for puzzle setups, replays and tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Drain the notifications queued since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Begin a new game on an empty board of the given extents.
    ///
    /// Accepted from `Menu` and `GameOver`; returns false (and changes
    /// nothing) while a game is running or paused. The first spawn may end
    /// the game immediately if the pit is too small for the piece.
    pub fn start(&mut self, dims: Dimensions) -> bool {
        if !matches!(self.state, EngineState::Menu | EngineState::GameOver) {
            return false;
        }

        self.board = Board::new(dims);
        self.active = None;
        self.held = None;
        self.can_hold = true;
        self.score = 0;
        self.drop_interval_ms = INITIAL_DROP_INTERVAL_MS;
        self.drop_timer_ms = 0;
        self.clock.invalidate();
        self.events.push(GameEvent::ScoreChanged {
            score: 0,
            high_score: self.high_score,
        });

        info!(
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            "starting game"
        );
        self.set_state(EngineState::Playing);
        self.spawn();
        true
    }

    /// Start again with the current board extents.
    pub fn restart(&mut self) -> bool {
        self.start(self.board.dimensions())
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// The piece is centered horizontally with its top layer at the ceiling.
    /// If that position collides the game is over. Returns false outside
    /// `Playing` or when the spawn ended the game.
    pub fn spawn(&mut self) -> bool {
        if self.state != EngineState::Playing {
            return false;
        }

        let drawn = Piece::random(self.rng.as_mut());
        let mut piece = mem::replace(&mut self.next, drawn);
        self.center(&mut piece);
        self.can_hold = true;

        let blocked = self
            .board
            .collides(&piece.shape, piece.x, piece.y, piece.z);
        debug!(
            piece = piece.name,
            x = piece.x,
            y = piece.y,
            z = piece.z,
            next = self.next.name,
            blocked,
            "spawn"
        );
        self.active = Some(piece);
        self.events.push(GameEvent::NextPiece);

        if blocked {
            self.game_over();
            return false;
        }
        true
    }

    /// Spawn anchor for `piece` in the current pit.
    fn center(&self, piece: &mut Piece) {
        piece.x = self.board.width() as i32 / 2 - 1;
        piece.y = self.board.height() as i32 - piece.shape.height() as i32;
        piece.z = self.board.depth() as i32 / 2 - 1;
    }

    /// Shift the active piece along the width axis.
    pub fn move_x(&mut self, dx: i32) -> bool {
        let moved = self.try_translate(dx, 0, 0);
        if moved {
            self.play(SoundEvent::Move);
        }
        moved
    }

    /// Shift the active piece along the depth axis.
    pub fn move_z(&mut self, dz: i32) -> bool {
        let moved = self.try_translate(0, 0, dz);
        if moved {
            self.play(SoundEvent::Move);
        }
        moved
    }

    /// Move the active piece if the target position is free. Silent.
    fn try_translate(&mut self, dx: i32, dy: i32, dz: i32) -> bool {
        if self.state != EngineState::Playing {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if self
            .board
            .collides(&piece.shape, piece.x + dx, piece.y + dy, piece.z + dz)
        {
            return false;
        }
        piece.x += dx;
        piece.y += dy;
        piece.z += dz;
        true
    }

    /// Rotate the active piece 90 degrees about `axis` in place.
    ///
    /// No wall kicks: a rotation that would collide is rejected.
    pub fn rotate(&mut self, axis: Axis, clockwise: bool) -> bool {
        if self.state != EngineState::Playing {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let candidate = piece.rotated(axis, clockwise);
        if self.board.collides(&candidate, piece.x, piece.y, piece.z) {
            return false;
        }
        piece.shape = candidate;
        self.play(SoundEvent::Rotate);
        true
    }

    pub fn rotate_x(&mut self, clockwise: bool) -> bool {
        self.rotate(Axis::X, clockwise)
    }

    pub fn rotate_y(&mut self, clockwise: bool) -> bool {
        self.rotate(Axis::Y, clockwise)
    }

    pub fn rotate_z(&mut self, clockwise: bool) -> bool {
        self.rotate(Axis::Z, clockwise)
    }

    /// Lowest layer the active piece can reach by falling straight down.
    pub fn ghost_y(&self) -> Option<i32> {
        let piece = self.active.as_ref()?;
        let mut y = piece.y;
        while !self.board.collides(&piece.shape, piece.x, y - 1, piece.z) {
            y -= 1;
        }
        Some(y)
    }

    /// Drop the active piece to its resting layer and lock it.
    pub fn hard_drop(&mut self) -> bool {
        if self.state != EngineState::Playing {
            return false;
        }
        let Some(ghost_y) = self.ghost_y() else {
            return false;
        };
        if let Some(piece) = self.active.as_mut() {
            piece.y = ghost_y;
        }
        self.lock();
        true
    }

    /// Write the active piece into the board, clear full layers, score them
    /// and spawn the next piece.
    pub fn lock(&mut self) {
        if self.state != EngineState::Playing {
            return;
        }
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board
            .place(&piece.shape, piece.x, piece.y, piece.z, piece.color);
        let lines = self.board.clear_lines();
        debug!(piece = piece.name, x = piece.x, y = piece.y, z = piece.z, lines, "lock");
        self.events.push(GameEvent::PieceLocked {
            lines_cleared: lines as u32,
        });

        if lines > 0 {
            self.score = self.score.saturating_add(line_clear_points(lines));
            if self.score > self.high_score {
                self.high_score = self.score;
                self.store.save(self.high_score);
            }
            self.drop_interval_ms = drop_interval_for_score(self.score);
            debug!(
                lines,
                score = self.score,
                interval_ms = self.drop_interval_ms,
                "layers cleared"
            );
            self.events.push(GameEvent::ScoreChanged {
                score: self.score,
                high_score: self.high_score,
            });
            self.play(SoundEvent::Line);
        } else {
            self.play(SoundEvent::Drop);
        }

        self.spawn();
    }

    /// Swap the active piece with the hold slot, once per spawned piece.
    ///
    /// With an empty slot the active piece is stored and the next piece
    /// spawns. Otherwise the held piece comes back re-centered at the top,
    /// without a collision check.
    pub fn hold(&mut self) -> bool {
        if self.state != EngineState::Playing || !self.can_hold {
            return false;
        }
        let Some(current) = self.active.take() else {
            return false;
        };

        match self.held.take() {
            Some(mut held) => {
                self.center(&mut held);
                self.active = Some(held);
                self.held = Some(current);
            }
            None => {
                self.held = Some(current);
                self.spawn();
            }
        }

        self.can_hold = false;
        self.events.push(GameEvent::Held);
        self.play(SoundEvent::Rotate);
        true
    }

    /// Playing <-> Paused. Resuming discards the time spent paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            EngineState::Playing => {
                self.set_state(EngineState::Paused);
                true
            }
            EngineState::Paused => {
                self.clock.invalidate();
                self.set_state(EngineState::Playing);
                true
            }
            _ => false,
        }
    }

    /// Leave a paused or finished game for the menu.
    pub fn go_to_menu(&mut self) -> bool {
        if !matches!(self.state, EngineState::Paused | EngineState::GameOver) {
            return false;
        }
        self.set_state(EngineState::Menu);
        true
    }

    /// Flip the mute flag. Muting stops everything, the menu track included.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.sound.is_muted();
        self.sound.set_muted(muted);
        if muted {
            for ev in SoundEvent::ALL {
                self.sound.stop(ev.as_str());
            }
            self.sound.stop(MENU_TRACK);
        }
        info!(muted, "sound toggled");
        muted
    }

    /// Advance gravity by `dt_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece falls
    /// one layer, or locks if it cannot, and the accumulator resets. At most
    /// one step happens per call.
    pub fn update(&mut self, dt_ms: u32) {
        if self.state != EngineState::Playing || self.active.is_none() {
            return;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(dt_ms);
        if self.drop_timer_ms > self.drop_interval_ms {
            if !self.try_translate(0, -1, 0) {
                self.lock();
            }
            self.drop_timer_ms = 0;
        }
    }

    /// Per-frame entry point: converts a monotonic timestamp into elapsed
    /// time and runs [`Engine::update`].
    pub fn frame(&mut self, now_ms: u64) {
        let dt = self.clock.tick(now_ms);
        self.update(dt);
    }

    /// Apply an action from an input mapper.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveX(dx) => self.move_x(dx as i32),
            GameAction::MoveZ(dz) => self.move_z(dz as i32),
            GameAction::Rotate { axis, clockwise } => self.rotate(axis, clockwise),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::Start => self.restart(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::ToggleMute => {
                self.toggle_mute();
                true
            }
            GameAction::Menu => self.go_to_menu(),
        }
    }

    /// Owned copy of everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active.clone(),
            ghost_y: self.ghost_y(),
            next: Some(self.next.clone()),
            held: self.held.clone(),
            can_hold: self.can_hold,
            state: self.state,
            score: self.score,
            high_score: self.high_score,
            drop_interval_ms: self.drop_interval_ms,
            muted: self.sound.is_muted(),
        }
    }

    /// Hand a fresh snapshot to `renderer`.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(&self.snapshot())
    }

    fn set_state(&mut self, to: EngineState) {
        let from = self.state;
        if from == to {
            return;
        }
        self.state = to;
        info!(from = from.as_str(), to = to.as_str(), "state change");
        self.events.push(GameEvent::StateChanged { from, to });
    }

    fn game_over(&mut self) {
        info!(score = self.score, high_score = self.high_score, "game over");
        self.set_state(EngineState::GameOver);
        self.events.push(GameEvent::GameOver { score: self.score });
        self.play(SoundEvent::GameOver);
    }

    fn play(&mut self, ev: SoundEvent) {
        self.sound.play(ev.as_str());
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("dims", &self.board.dimensions())
            .field("active", &self.active.as_ref().map(|p| p.name))
            .field("next", &self.next.name)
            .field("held", &self.held.as_ref().map(|p| p.name))
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("drop_interval_ms", &self.drop_interval_ms)
            .finish_non_exhaustive()
    }
}
