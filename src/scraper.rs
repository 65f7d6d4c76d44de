use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::events::EventConfig;
use crate::extract::extract_card;
use crate::listing::ListingSource;
use crate::models::CardRecord;
use crate::sources::SourceIndex;
use crate::store::CardStore;

// Politeness pause between listing pages.
const PAGE_DELAY: Duration = Duration::from_millis(500);

/// Cards accumulated by one event's run plus the ids already taken.
/// Owned by a single run; seeded from the catalog on disk so a re-run
/// admits nothing it has seen before.
pub struct ScrapeState {
    cards: Vec<CardRecord>,
    seen: HashSet<String>,
}

impl ScrapeState {
    pub fn from_existing(cards: Vec<CardRecord>) -> Self {
        let seen = cards.iter().map(|card| card.id.clone()).collect();
        Self { cards, seen }
    }

    /// Keep the card unless its id was already admitted. Returns the stored
    /// record when it was new.
    pub fn admit(&mut self, card: CardRecord) -> Option<&CardRecord> {
        if !self.seen.insert(card.id.clone()) {
            return None;
        }
        self.cards.push(card);
        self.cards.last()
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// What one event's run accomplished.
#[derive(Debug)]
pub struct RunSummary {
    pub event: &'static str,
    pub pages_scraped: u32,
    pub new_cards: usize,
    pub total_cards: usize,
}

/// Walks one event's listing pages, extracts new cards, and rewrites the
/// event's catalog file after every page.
pub struct EventScraper<'a> {
    event: &'a EventConfig,
    store: &'a CardStore,
    sources: &'a SourceIndex,
}

impl<'a> EventScraper<'a> {
    pub fn new(event: &'a EventConfig, store: &'a CardStore, sources: &'a SourceIndex) -> Self {
        Self { event, store, sources }
    }

    pub async fn run<S: ListingSource>(&self, listing: &mut S) -> Result<RunSummary> {
        info!("Starting scraping for {}", self.event.name);

        let existing = match self.store.load(self.event.output_file) {
            Ok(cards) => cards,
            Err(e) => {
                warn!("[{}] Ignoring unreadable existing catalog: {:#}", self.event.name, e);
                Vec::new()
            }
        };
        if !existing.is_empty() {
            info!("[{}] Loaded {} existing cards", self.event.name, existing.len());
        }
        let initial_count = existing.len();
        let mut state = ScrapeState::from_existing(existing);
        let mut pages_scraped = 0;

        for page in 1..=self.event.max_pages {
            let url = self.event.page_url(page);
            let elements = match listing.fetch_cards(&url).await? {
                Some(elements) => elements,
                None => {
                    info!("[{}] No card list found on {}", self.event.name, url);
                    break;
                }
            };
            if elements.is_empty() {
                info!("[{}] No more cards on {}", self.event.name, url);
                break;
            }
            info!("[{}] Found {} cards on {}", self.event.name, elements.len(), url);

            for element in &elements {
                if let Some(card) = extract_card(element, self.sources) {
                    if let Some(added) = state.admit(card) {
                        info!("[{}] Added card: {} ({})", self.event.name, added.title, added.id);
                    }
                }
            }
            pages_scraped = page;

            info!(
                "[{}] Page {} done. Collected {} cards so far. Saving...",
                self.event.name,
                page,
                state.len()
            );
            // A failed save keeps the run going; the next page saves the
            // same cards again plus whatever it adds.
            if let Err(e) = self.store.save(self.event.output_file, state.cards()) {
                error!("[{}] Failed to save catalog: {:#}", self.event.name, e);
            }

            if page < self.event.max_pages {
                tokio::time::sleep(PAGE_DELAY).await;
            }
        }

        info!("{} scraping complete.", self.event.name);
        Ok(RunSummary {
            event: self.event.name,
            pages_scraped,
            new_cards: state.len() - initial_count,
            total_cards: state.len(),
        })
    }
}
