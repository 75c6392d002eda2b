use chrono::NaiveDate;
use contracts::domain::a001_user::{ManagedUser, UserKind};

/// Mock user base, regenerated on every page load.
pub fn generate_users(count: u32) -> Vec<ManagedUser> {
    (1..=count)
        .map(|i| {
            let kind = if i % 7 == 0 {
                UserKind::Gm
            } else {
                UserKind::Normal
            };
            let month = (i - 1) % 12 + 1;
            let day = (i - 1) % 28 + 1;
            ManagedUser {
                id: i,
                name: format!("用户{}", i),
                email: format!("user{}@example.com", i),
                kind,
                last_login: NaiveDate::from_ymd_opt(2024, month, day)
                    .unwrap_or_default()
                    .and_hms_opt(10, 30, 0)
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// Type filter plus case-insensitive substring search over name and email.
pub fn filter_users(
    users: &[ManagedUser],
    kind: Option<UserKind>,
    term: &str,
) -> Vec<ManagedUser> {
    let term = term.trim().to_lowercase();
    users
        .iter()
        .filter(|user| kind.map_or(true, |kind| user.kind == kind))
        .filter(|user| {
            term.is_empty()
                || user.name.to_lowercase().contains(&term)
                || user.email.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_users_ids_are_sequential() {
        let users = generate_users(50);
        assert_eq!(users.len(), 50);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[49].id, 50);
    }

    #[test]
    fn test_filter_by_kind() {
        let users = generate_users(14);
        let gms = filter_users(&users, Some(UserKind::Gm), "");
        assert_eq!(gms.len(), 2); // ids 7 and 14
        assert!(gms.iter().all(|user| user.kind == UserKind::Gm));
    }

    #[test]
    fn test_filter_by_search_term() {
        let users = generate_users(20);
        let hits = filter_users(&users, None, "user12@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 12);
    }

    #[test]
    fn test_filter_combines_kind_and_term() {
        let users = generate_users(20);
        let hits = filter_users(&users, Some(UserKind::Normal), "用户1");
        // 用户1, 用户10..19 minus the GM 用户14.
        assert!(hits.iter().all(|user| user.kind == UserKind::Normal));
        assert!(hits.iter().all(|user| user.name.contains("用户1")));
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let users = generate_users(5);
        assert_eq!(filter_users(&users, None, "   ").len(), 5);
    }
}
