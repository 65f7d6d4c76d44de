use rand::Rng;

use crate::models::CardRecord;

/// Uniformly random card, or nothing from an empty catalog.
pub fn random_card(cards: &[CardRecord]) -> Option<&CardRecord> {
    if cards.is_empty() {
        return None;
    }
    let idx = rand::rng().random_range(0..cards.len());
    cards.get(idx)
}

/// All cards of one tier. Tier comparison ignores ASCII case so letter
/// tiers match however the caller spells them.
pub fn cards_by_tier<'a>(cards: &'a [CardRecord], tier: &str) -> Vec<&'a CardRecord> {
    cards
        .iter()
        .filter(|card| card.tier.eq_ignore_ascii_case(tier))
        .collect()
}

/// Exact id lookup.
pub fn card_by_id<'a>(cards: &'a [CardRecord], id: &str) -> Option<&'a CardRecord> {
    cards.iter().find(|card| card.id == id)
}
