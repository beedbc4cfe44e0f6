//! High-score persistence
//!
//! The record is the lowest number of rejected moves across completed
//! human-played games, stored as a single decimal integer in a plain-text
//! file. A missing, unreadable, or unparsable file means "no record yet";
//! a stored 0 is a genuine perfect game, not a sentinel.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Loads and saves the best-score record
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current record; None when no record exists
    pub fn load(&self) -> Option<u32> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        content.trim().parse().ok()
    }

    /// Persist a new record, creating parent directories as needed
    pub fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write high score file: {}", self.path.display()))
    }
}
