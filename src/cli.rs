//! Command line options for the `tetris3d` binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::Dimensions;

#[derive(Debug, Clone, Parser)]
#[command(name = "tetris3d", version)]
#[command(about = "3D falling-block puzzle in the terminal")]
pub struct Args {
    /// Pit size preset; individual extents override it
    #[arg(long, value_parser = ["small", "classic", "large"])]
    pub preset: Option<String>,

    /// Pit width (x)
    #[arg(long, value_parser = clap::value_parser!(u8).range(4..=32))]
    pub width: Option<u8>,

    /// Pit height (y, layers)
    #[arg(long, value_parser = clap::value_parser!(u8).range(4..=32))]
    pub height: Option<u8>,

    /// Pit depth (z)
    #[arg(long, value_parser = clap::value_parser!(u8).range(4..=32))]
    pub depth: Option<u8>,

    /// Seed for the piece sequence; random when omitted
    #[arg(long)]
    pub seed: Option<u32>,

    /// Start with sound muted
    #[arg(long)]
    pub mute: bool,

    /// Where the high score is kept
    #[arg(long, default_value = "tetris3d_highscore.json")]
    pub high_score_file: PathBuf,

    /// Write logs here (filtered by RUST_LOG); no logging when omitted
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Pit extents: the preset (classic by default) with any explicit
    /// `--width/--height/--depth` applied on top.
    pub fn dimensions(&self) -> Dimensions {
        let base = self
            .preset
            .as_deref()
            .and_then(Dimensions::preset)
            .unwrap_or(Dimensions::CLASSIC);
        Dimensions::new(
            self.width.unwrap_or(base.width),
            self.height.unwrap_or(base.height),
            self.depth.unwrap_or(base.depth),
        )
    }

    /// The explicit seed, or one derived from the wall clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
