use crate::listing::CardElement;
use crate::models::CardRecord;
use crate::sources::SourceIndex;

// The CDN path puts the numeric tier at this position when split on '/',
// e.g. https://cdn.shoob.gg/images/cards/3/abc.png.
const TIER_SEGMENT: usize = 5;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Detail link for a card element: the parent's href, else the element's
/// own, else the first descendant link. First non-empty wins.
pub fn detail_link(element: &CardElement) -> Option<&str> {
    non_empty(element.parent_link.as_deref())
        .or_else(|| non_empty(element.own_link.as_deref()))
        .or_else(|| non_empty(element.child_link.as_deref()))
}

/// Card id: the final path segment of its detail link.
pub fn card_id(link: &str) -> Option<&str> {
    non_empty(link.rsplit('/').next())
}

/// Display title: the media node's title attribute, alt as fallback.
pub fn display_title(element: &CardElement) -> Option<&str> {
    non_empty(element.media_title.as_deref()).or_else(|| non_empty(element.media_alt.as_deref()))
}

/// Numeric tier parsed out of the media URL path. A src that does not
/// carry a number there fails the card, never the scrape.
pub fn tier_from_src(src: &str) -> Option<String> {
    src.split('/')
        .nth(TIER_SEGMENT)?
        .parse::<u32>()
        .ok()
        .map(|tier| tier.to_string())
}

/// Build a card record from one element, or nothing if any required piece
/// is missing: media src, title/alt, detail link, a known source for the
/// title, and a numeric tier. Dedup against already-seen ids is the
/// caller's job.
pub fn extract_card(element: &CardElement, sources: &SourceIndex) -> Option<CardRecord> {
    let image = non_empty(element.media_src.as_deref())?;
    let title = display_title(element)?;
    let link = detail_link(element)?;
    let id = card_id(link)?;
    let source = sources.lookup(title)?;
    let tier = tier_from_src(image)?;
    Some(CardRecord {
        id: id.to_string(),
        tier,
        title: title.to_string(),
        source: source.to_string(),
        image: image.to_string(),
    })
}
