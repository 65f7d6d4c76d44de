use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Attributes read off one card element on a listing page. Collected in the
/// browser in a single pass; everything downstream works on these plain
/// values instead of live DOM handles.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardElement {
    pub media_src: Option<String>,
    pub media_title: Option<String>,
    pub media_alt: Option<String>,
    pub parent_link: Option<String>,
    pub own_link: Option<String>,
    pub child_link: Option<String>,
}

/// Where listing pages come from. Production drives a headless browser;
/// tests script the pages.
#[async_trait]
pub trait ListingSource {
    /// Fetch one rendered listing page and return its card elements.
    /// `None` means the card-list container never appeared — the listing
    /// is over, not an error. An `Err` is a failed fetch and ends the
    /// calling event's run.
    async fn fetch_cards(&mut self, url: &str) -> Result<Option<Vec<CardElement>>>;

    /// Release whatever backs this source. Default is a no-op.
    async fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
