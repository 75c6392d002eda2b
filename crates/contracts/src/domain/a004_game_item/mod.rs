use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemQuality {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl ItemQuality {
    pub fn label(&self) -> &'static str {
        match self {
            ItemQuality::Common => "普通",
            ItemQuality::Rare => "稀有",
            ItemQuality::Epic => "史诗",
            ItemQuality::Legendary => "传说",
        }
    }
}

/// An in-game item definition managed per game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameItem {
    pub id: u32,
    pub name: String,
    pub quality: ItemQuality,
    pub quantity: u32,
    /// Reference price in the in-game currency.
    pub price: u32,
}
