use contracts::domain::a005_player_item::{Backpack, CurrencyBalance, PlayerItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    /// Zero or unparsable amount.
    InvalidAmount,
    /// Source wallet holds less than the requested amount.
    Insufficient,
}

impl TransferError {
    pub fn message(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "请输入有效的转移数量",
            TransferError::Insufficient => "余额不足",
        }
    }
}

pub fn generate_player_items() -> Vec<PlayerItem> {
    vec![
        PlayerItem {
            id: 1,
            name: "屠龙宝刀".to_string(),
            quantity: 1,
            location: Backpack::Online,
            list_price: None,
        },
        PlayerItem {
            id: 2,
            name: "强化石".to_string(),
            quantity: 45,
            location: Backpack::Online,
            list_price: Some(120),
        },
        PlayerItem {
            id: 3,
            name: "回城卷轴".to_string(),
            quantity: 20,
            location: Backpack::InGame,
            list_price: None,
        },
        PlayerItem {
            id: 4,
            name: "幸运符".to_string(),
            quantity: 8,
            location: Backpack::InGame,
            list_price: None,
        },
    ]
}

pub fn generate_balances() -> Vec<CurrencyBalance> {
    vec![
        CurrencyBalance {
            id: 1,
            name: "金币".to_string(),
            online_amount: 12_000,
            game_amount: 3_500,
        },
        CurrencyBalance {
            id: 2,
            name: "元宝".to_string(),
            online_amount: 640,
            game_amount: 120,
        },
    ]
}

/// Move currency between the online wallet and the in-game wallet.
pub fn transfer(
    balance: &mut CurrencyBalance,
    to_game: bool,
    amount: u64,
) -> Result<(), TransferError> {
    if amount == 0 {
        return Err(TransferError::InvalidAmount);
    }
    let (from, to) = if to_game {
        (&mut balance.online_amount, &mut balance.game_amount)
    } else {
        (&mut balance.game_amount, &mut balance.online_amount)
    };
    if *from < amount {
        return Err(TransferError::Insufficient);
    }
    *from -= amount;
    *to += amount;
    Ok(())
}

/// Move an item to the other backpack. Listed items stay put until
/// unlisted.
pub fn move_item(item: &mut PlayerItem) -> Result<(), &'static str> {
    if item.is_listed() {
        return Err("已上架的物品不能移动");
    }
    item.location = item.location.other();
    Ok(())
}

pub fn set_listing(item: &mut PlayerItem, price: Option<u32>) {
    item.list_price = price;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold() -> CurrencyBalance {
        CurrencyBalance {
            id: 1,
            name: "金币".to_string(),
            online_amount: 100,
            game_amount: 10,
        }
    }

    #[test]
    fn test_transfer_moves_between_wallets() {
        let mut balance = gold();
        transfer(&mut balance, true, 30).unwrap();
        assert_eq!(balance.online_amount, 70);
        assert_eq!(balance.game_amount, 40);
        transfer(&mut balance, false, 40).unwrap();
        assert_eq!(balance.online_amount, 110);
        assert_eq!(balance.game_amount, 0);
    }

    #[test]
    fn test_transfer_rejects_zero_amount() {
        let mut balance = gold();
        assert_eq!(transfer(&mut balance, true, 0), Err(TransferError::InvalidAmount));
        assert_eq!(balance, gold());
    }

    #[test]
    fn test_transfer_rejects_insufficient_balance() {
        let mut balance = gold();
        assert_eq!(transfer(&mut balance, false, 11), Err(TransferError::Insufficient));
        assert_eq!(balance, gold());
    }

    #[test]
    fn test_move_item_flips_location() {
        let mut item = generate_player_items().remove(0);
        assert_eq!(item.location, Backpack::Online);
        move_item(&mut item).unwrap();
        assert_eq!(item.location, Backpack::InGame);
    }

    #[test]
    fn test_listed_item_cannot_move() {
        let mut item = generate_player_items().remove(1);
        assert!(item.is_listed());
        assert!(move_item(&mut item).is_err());
        assert_eq!(item.location, Backpack::Online);

        set_listing(&mut item, None);
        assert!(move_item(&mut item).is_ok());
    }
}
