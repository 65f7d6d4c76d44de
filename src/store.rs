use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::models::CardRecord;

/// Directory of per-event catalog files, one JSON array per event.
pub struct CardStore {
    dir: PathBuf,
}

impl CardStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Read an event's catalog. A file that does not exist yet is an empty
    /// catalog; a file that exists but cannot be read or parsed is an error
    /// for the caller to decide on.
    pub fn load(&self, file: &str) -> Result<Vec<CardRecord>> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let cards = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        Ok(cards)
    }

    /// Replace an event's catalog with the full accumulated card list.
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so readers never see a half-written file.
    pub fn save(&self, file: &str, cards: &[CardRecord]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create card directory {}", self.dir.display()))?;
        let path = self.path(file);
        let tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("Failed to create temp file in {}", self.dir.display()))?;
        serde_json::to_writer_pretty(tmp.as_file(), cards)
            .with_context(|| format!("Failed to serialize catalog {}", path.display()))?;
        tmp.persist(&path)
            .with_context(|| format!("Failed to replace catalog {}", path.display()))?;
        Ok(())
    }
}
