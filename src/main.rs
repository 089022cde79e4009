//! Terminal 3D falling-block runner (default binary).
//!
//! Wires the engine to crossterm input, the framebuffer pit view, the
//! terminal bell and a JSON high-score file, then runs a fixed-rate frame
//! loop until Ctrl-C.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tetris3d::cli::Args;
use tetris3d::core::{Engine, SimpleRng, SoundEffects};
use tetris3d::input::{map_key, should_quit};
use tetris3d::persist::FileStore;
use tetris3d::term::{BellSound, TerminalFrontend};
use tetris3d::types::FRAME_MS;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let dims = args.dimensions();
    let seed = args.seed();
    info!(
        seed,
        width = dims.width,
        height = dims.height,
        depth = dims.depth,
        high_score_file = %args.high_score_file.display(),
        "tetris3d starting"
    );

    let mut sound = BellSound::new();
    sound.set_muted(args.mute);
    let mut engine = Engine::with_ports(
        Box::new(SimpleRng::new(seed)),
        Box::new(sound),
        Box::new(FileStore::new(&args.high_score_file)),
    )
    .with_dimensions(dims);

    let mut frontend = TerminalFrontend::new()?;
    frontend.enter()?;

    let result = run(&mut engine, &mut frontend);

    // Always try to restore terminal state.
    let _ = frontend.exit();
    info!(
        score = engine.score(),
        high_score = engine.high_score(),
        "tetris3d exiting"
    );
    result
}

/// Logs go to a file only: the terminal is in raw mode on the alternate screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(engine: &mut Engine, frontend: &mut TerminalFrontend) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);
    let epoch = Instant::now();
    let mut next_frame = epoch;

    loop {
        engine.frame(epoch.elapsed().as_millis() as u64);
        for ev in engine.take_events() {
            debug!(?ev, "game event");
        }
        engine.render_with(frontend)?;

        // Input with timeout until next frame.
        next_frame += frame;
        while let Some(timeout) = next_frame.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        let accepted = engine.apply_action(action);
                        debug!(?action, accepted, "input");
                    }
                }
                Event::Resize(w, h) => frontend.resize(w, h),
                _ => {}
            }
        }

        // Fell behind (slow terminal): don't try to catch up.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }
}
