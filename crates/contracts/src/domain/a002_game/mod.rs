use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A game title operated through the GM console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
}
