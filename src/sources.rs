use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// One entry of the local reference dataset. The file carries more fields
/// per card; only the title/source pair matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceCard {
    pub title: String,
    pub source: String,
}

/// Lookup table from a card's display title to its series/franchise.
/// Built once at startup and shared read-only by every event scrape.
#[derive(Debug, Default)]
pub struct SourceIndex {
    by_title: HashMap<String, String>,
}

impl SourceIndex {
    pub fn from_cards(cards: Vec<SourceCard>) -> Self {
        let mut by_title = HashMap::with_capacity(cards.len());
        // Later entries win, matching how the reference file is maintained.
        for card in cards {
            by_title.insert(card.title, card.source);
        }
        Self { by_title }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source reference file {}", path.display()))?;
        let cards: Vec<SourceCard> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse source reference file {}", path.display()))?;
        info!("Loaded {} source reference entries", cards.len());
        Ok(Self::from_cards(cards))
    }

    pub fn lookup(&self, title: &str) -> Option<&str> {
        self.by_title.get(title).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}
