use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use card_harvest::runner::scrape_all_events;
use card_harvest::sources::SourceIndex;
use card_harvest::store::CardStore;

const SOURCE_REFERENCE_FILE: &str = "card_sources.json";
const CARDS_DIR: &str = "cards";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting card event scraper");

    let args: Vec<String> = env::args().collect();
    let headless = !args.contains(&"--headed".to_string());
    if !headless {
        info!("Running in headed mode (browser visible)");
    }
    let every_minutes = args
        .windows(2)
        .find(|pair| pair[0] == "--every")
        .and_then(|pair| pair[1].parse::<u64>().ok());

    let sources = SourceIndex::load(Path::new(SOURCE_REFERENCE_FILE))?;
    let store = CardStore::new(CARDS_DIR);

    loop {
        let outcomes = scrape_all_events(&store, &sources, headless).await;

        let successful = outcomes.iter().filter(|o| o.result.is_ok()).count();
        let failed = outcomes.len() - successful;
        if failed > 0 {
            error!(
                "Scrape finished: {} events ok, {} failed. Partial catalogs were kept.",
                successful, failed
            );
        } else {
            info!("Scrape finished: all {} events ok", successful);
        }

        match every_minutes {
            Some(minutes) => {
                info!("Next scrape in {} minutes", minutes);
                tokio::time::sleep(Duration::from_secs(minutes * 60)).await;
            }
            None => break,
        }
    }

    Ok(())
}
