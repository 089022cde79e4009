//! High-score file: one JSON integer on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::Persistence;

/// `Persistence` backed by a small JSON file.
///
/// A missing file is a high score of 0. A corrupt file is also read as 0
/// (with a warning) and gets overwritten by the next save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored value, `None` when the file does not exist.
    pub fn read(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let value = serde_json::from_str::<u32>(text.trim())
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(value))
    }

    pub fn write(&self, high_score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let text = serde_json::to_string(&high_score)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl Persistence for FileStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(value) => {
                debug!(path = %self.path.display(), ?value, "high score loaded");
                value.unwrap_or(0)
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "ignoring unreadable high score file");
                0
            }
        }
    }

    fn save(&mut self, high_score: u32) {
        if let Err(err) = self.write(high_score) {
            warn!(error = %format!("{err:#}"), high_score, "could not save high score");
        }
    }
}
