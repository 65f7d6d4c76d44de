use std::future::Future;

use anyhow::Result;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::browser::BrowserListingSource;
use crate::events::{EventConfig, EVENTS};
use crate::listing::ListingSource;
use crate::scraper::{EventScraper, RunSummary};
use crate::sources::SourceIndex;
use crate::store::CardStore;

/// How one event's run ended. A failed event never takes the others down
/// with it; the runner reports every outcome once all have settled.
pub struct EventOutcome {
    pub event: &'static str,
    pub result: Result<RunSummary>,
}

/// Run every event concurrently, each against its own listing source from
/// `connect`. Within an event pages stay strictly ordered; across events
/// there is no ordering at all.
pub async fn run_events<S, F, Fut>(
    events: &[EventConfig],
    store: &CardStore,
    sources: &SourceIndex,
    connect: F,
) -> Vec<EventOutcome>
where
    S: ListingSource + Send,
    F: Fn(&EventConfig) -> Fut,
    Fut: Future<Output = Result<S>>,
{
    let runs = events.iter().map(|event| {
        let connect = &connect;
        async move {
            let result = match connect(event).await {
                Ok(mut listing) => {
                    let run = EventScraper::new(event, store, sources).run(&mut listing).await;
                    if let Err(e) = listing.shutdown().await {
                        warn!("[{}] Listing source shutdown failed: {:#}", event.name, e);
                    }
                    run
                }
                Err(e) => Err(e),
            };
            match &result {
                Ok(summary) => info!(
                    "{}: {} new cards, {} total, {} pages",
                    event.name, summary.new_cards, summary.total_cards, summary.pages_scraped
                ),
                Err(e) => error!("{} failed: {:#}", event.name, e),
            }
            EventOutcome {
                event: event.name,
                result,
            }
        }
    });

    let outcomes = join_all(runs).await;
    info!("All scraping complete.");
    outcomes
}

/// Production entry: one fresh browser session per configured event.
pub async fn scrape_all_events(
    store: &CardStore,
    sources: &SourceIndex,
    headless: bool,
) -> Vec<EventOutcome> {
    run_events(EVENTS, store, sources, |_| {
        BrowserListingSource::launch(headless)
    })
    .await
}
