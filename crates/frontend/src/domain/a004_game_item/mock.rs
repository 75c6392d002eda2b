use contracts::domain::a004_game_item::{GameItem, ItemQuality};

const NAME_STEMS: [&str; 5] = ["长剑", "法杖", "护甲", "戒指", "药水"];

pub fn generate_items(count: u32) -> Vec<GameItem> {
    (1..=count)
        .map(|i| {
            let quality = match i % 10 {
                0 => ItemQuality::Legendary,
                7 | 8 => ItemQuality::Epic,
                4 | 5 | 6 => ItemQuality::Rare,
                _ => ItemQuality::Common,
            };
            GameItem {
                id: i,
                name: format!("{}{}", NAME_STEMS[(i as usize - 1) % NAME_STEMS.len()], i),
                quality,
                quantity: (i % 20) + 1,
                price: i * 10,
            }
        })
        .collect()
}

/// Keyword chips behave as an OR filter; no active keyword means no filter.
pub fn matches_keywords(item: &GameItem, keywords: &[String]) -> bool {
    keywords.is_empty() || keywords.iter().any(|keyword| item.name.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_items_covers_all_qualities() {
        let items = generate_items(100);
        assert_eq!(items.len(), 100);
        for quality in [
            ItemQuality::Common,
            ItemQuality::Rare,
            ItemQuality::Epic,
            ItemQuality::Legendary,
        ] {
            assert!(items.iter().any(|item| item.quality == quality));
        }
    }

    #[test]
    fn test_matches_keywords_is_or_semantics() {
        let items = generate_items(10);
        let keywords = vec!["长剑".to_string(), "法杖".to_string()];
        let hits: Vec<&GameItem> = items
            .iter()
            .filter(|item| matches_keywords(item, &keywords))
            .collect();
        assert!(!hits.is_empty());
        assert!(hits
            .iter()
            .all(|item| item.name.contains("长剑") || item.name.contains("法杖")));
    }

    #[test]
    fn test_no_keywords_matches_everything() {
        let items = generate_items(5);
        assert!(items.iter().all(|item| matches_keywords(item, &[])));
    }
}
