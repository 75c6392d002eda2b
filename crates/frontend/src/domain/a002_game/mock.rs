use chrono::NaiveDate;
use contracts::domain::a002_game::Game;

pub fn generate_games(count: u32) -> Vec<Game> {
    (1..=count)
        .map(|i| Game {
            id: i,
            name: format!("游戏{}", i),
            description: format!("这是游戏{}的简介", i),
            created_at: NaiveDate::from_ymd_opt(2024, (i - 1) % 12 + 1, (i - 1) % 28 + 1)
                .unwrap_or_default(),
        })
        .collect()
}

/// Next free id after create/delete churn.
pub fn next_game_id(games: &[Game]) -> u32 {
    games.iter().map(|game| game.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_game_id_after_deletes() {
        let mut games = generate_games(5);
        games.retain(|game| game.id != 5);
        assert_eq!(next_game_id(&games), 5);
        games.clear();
        assert_eq!(next_game_id(&games), 1);
    }
}
