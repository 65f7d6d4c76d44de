use serde::{Deserialize, Serialize};

/// One scraped card as it is stored in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub tier: String,
    pub title: String,
    pub source: String,
    pub image: String,
}
