use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::time::Instant;
use tracing::{error, info};

use crate::listing::{CardElement, ListingSource};

const CARD_LIST_SELECTOR: &str = ".text-center.cards-list";
const CARD_LIST_TIMEOUT: Duration = Duration::from_secs(10);
const SELECTOR_POLL: Duration = Duration::from_millis(250);

// Collects every card element's attributes in one pass so the page is
// queried once per listing, not once per card.
const COLLECT_CARDS_JS: &str = r#"
    Array.from(document.querySelectorAll('.text-center.cards-list .card-main .card'))
        .map(card => {
            const media = card.querySelector('.cardContent .cardData img, .cardContent .cardData video');
            const child = card.querySelector('a');
            const parent = card.parentElement;
            return {
                mediaSrc: media ? media.getAttribute('src') : null,
                mediaTitle: media ? media.getAttribute('title') : null,
                mediaAlt: media ? media.getAttribute('alt') : null,
                parentLink: parent ? parent.getAttribute('href') : null,
                ownLink: card.getAttribute('href'),
                childLink: child ? child.getAttribute('href') : null,
            };
        });
"#;

/// Headless Chromium session serving rendered listing pages. Each event
/// run gets its own session; nothing is shared between events.
pub struct BrowserListingSource {
    browser: Browser,
    page: Page,
}

impl BrowserListingSource {
    pub async fn launch(headless: bool) -> Result<Self> {
        info!("Initializing browser");

        let mut config = BrowserConfig::builder();
        if !headless {
            config = config.with_head();
        }
        config = config.window_size(1920, 1080);
        config = config.viewport(None);

        let browser_config = config
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build browser config: {}", e))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .context("Failed to launch browser")?;

        tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if let Err(e) = h {
                    error!("Browser handler error: {:?}", e);
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("Failed to open page")?;

        Ok(Self { browser, page })
    }

    /// Poll for the card-list container until it shows up or the timeout
    /// passes. Listing pages render it via script, so it can lag the
    /// navigation by a while.
    async fn card_list_appears(&self) -> bool {
        let deadline = Instant::now() + CARD_LIST_TIMEOUT;
        loop {
            if self.page.find_element(CARD_LIST_SELECTOR).await.is_ok() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(SELECTOR_POLL).await;
        }
    }
}

#[async_trait]
impl ListingSource for BrowserListingSource {
    async fn fetch_cards(&mut self, url: &str) -> Result<Option<Vec<CardElement>>> {
        self.page
            .goto(url)
            .await
            .with_context(|| format!("Failed to navigate to {}", url))?;
        self.page
            .wait_for_navigation()
            .await
            .with_context(|| format!("Navigation did not settle for {}", url))?;

        if !self.card_list_appears().await {
            return Ok(None);
        }

        let cards = self
            .page
            .evaluate(COLLECT_CARDS_JS)
            .await
            .with_context(|| format!("Failed to read card elements on {}", url))?
            .into_value::<Vec<CardElement>>()
            .context("Card elements did not deserialize")?;
        Ok(Some(cards))
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.browser.close().await.context("Failed to close browser")?;
        Ok(())
    }
}
