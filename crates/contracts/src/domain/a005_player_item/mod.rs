use serde::{Deserialize, Serialize};

/// Where a player item currently lives: the online vault or the in-game
/// backpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backpack {
    Online,
    InGame,
}

impl Backpack {
    pub fn label(&self) -> &'static str {
        match self {
            Backpack::Online => "在线仓库",
            Backpack::InGame => "游戏背包",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Backpack::Online => Backpack::InGame,
            Backpack::InGame => Backpack::Online,
        }
    }
}

/// An item owned by the player, movable between the two backpacks and
/// listable on the trade market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub location: Backpack,
    /// Set while the item is listed for sale.
    #[serde(rename = "listPrice")]
    pub list_price: Option<u32>,
}

impl PlayerItem {
    pub fn is_listed(&self) -> bool {
        self.list_price.is_some()
    }
}

/// A currency with separate online and in-game balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub id: u32,
    pub name: String,
    #[serde(rename = "onlineAmount")]
    pub online_amount: u64,
    #[serde(rename = "gameAmount")]
    pub game_amount: u64,
}
