//! Mapping from target path to the standalone content document the
//! embedded frames load. Single source of truth for every page the four
//! consoles can open in a tab.

use std::collections::HashMap;

use contracts::domain::a001_user::UserKind;
use leptos::prelude::*;

use crate::domain::a001_user::ui::UserListPage;
use crate::domain::a002_game::ui::GameListPage;
use crate::domain::a003_game_server::ui::ServerListPage;
use crate::domain::a004_game_item::ui::ItemListPage;
use crate::domain::a005_player_item::ui::PlayerItemsPage;
use crate::domain::a006_chat_room::ui::ChatRoomPage;
use crate::system::pages::placeholder::PlaceholderPage;
use crate::system::pages::profile::ProfilePage;

/// Render the content document for `target`, which may carry a query
/// string. Unknown targets return `None`; the frame then shows whatever
/// the hosting server answers, and the tab keeps polling until the budget
/// runs out — an invalid target is not an error at this level.
pub fn embedded_content(target: &str) -> Option<AnyView> {
    let (path, query) = split_target(target);

    let view = match path {
        "/admin/users" => {
            let kind = query.get("type").and_then(|t| match t.as_str() {
                "normal" => Some(UserKind::Normal),
                "gm" => Some(UserKind::Gm),
                _ => None,
            });
            view! { <UserListPage initial_kind=kind /> }.into_any()
        }
        "/gm/game" => view! { <GameListPage /> }.into_any(),
        "/gm/game-management" => view! { <ServerListPage /> }.into_any(),
        "/gm/items" => {
            let game_id = query.get("id").and_then(|id| id.parse::<u32>().ok());
            view! { <ItemListPage game_id=game_id /> }.into_any()
        }
        "/user-center/player-items" => view! { <PlayerItemsPage /> }.into_any(),
        "/user-center/chat-room" => view! { <ChatRoomPage /> }.into_any(),
        "/user-center/profile" => view! { <ProfilePage /> }.into_any(),

        // Menu targets without a dedicated screen yet: a titled stub, so
        // the embedded frame reaches readiness instead of spinning on a
        // missing document.
        "/admin/overview" => placeholder("控制台概览"),
        "/admin/analytics" => placeholder("数据分析"),
        "/admin/reports" => placeholder("报表"),
        "/admin/content/pages" => placeholder("页面管理"),
        "/admin/content/posts" => placeholder("文章管理"),
        "/admin/content/media" => placeholder("媒体管理"),
        "/admin/settings/general" => placeholder("常规设置"),
        "/admin/settings/security" => placeholder("安全设置"),
        "/admin/settings/appearance" => placeholder("外观设置"),
        "/gm/player-management" => placeholder("玩家管理"),
        "/gm/announcement" => placeholder("公告管理"),
        "/gm/statistics" => placeholder("数据统计"),
        "/gm/settings" => placeholder("系统设置"),
        "/gm/help" => placeholder("开发 API 文档"),
        "/tech-agent/overview" => placeholder("技术代理概览"),
        "/tech-agent/code" => placeholder("代码管理"),
        "/tech-agent/servers" => placeholder("服务器管理"),
        "/tech-agent/databases" => placeholder("数据库管理"),
        "/tech-agent/security" => placeholder("安全设置"),
        "/user-center/project-structure" => placeholder("项目结构"),
        "/user-center/analytics" => placeholder("数据分析"),
        "/user-center/settings" => placeholder("设置"),

        _ => return None,
    };
    Some(view)
}

fn placeholder(title: &'static str) -> AnyView {
    view! { <PlaceholderPage title /> }.into_any()
}

fn split_target(target: &str) -> (&str, HashMap<String, String>) {
    match target.split_once('?') {
        Some((path, query)) => (path, serde_qs::from_str(query).unwrap_or_default()),
        None => (target, HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_target_without_query() {
        let (path, query) = split_target("/admin/users");
        assert_eq!(path, "/admin/users");
        assert!(query.is_empty());
    }

    #[test]
    fn test_split_target_with_query() {
        let (path, query) = split_target("/gm/items?id=7");
        assert_eq!(path, "/gm/items");
        assert_eq!(query.get("id").map(String::as_str), Some("7"));
    }

    // Filtered list pages take their query parameter as an Option; both
    // with and without a query the target must resolve.
    #[test]
    fn test_query_targets_resolve() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(embedded_content("/admin/users").is_some());
            assert!(embedded_content("/admin/users?type=gm").is_some());
            assert!(embedded_content("/gm/items").is_some());
            assert!(embedded_content("/gm/items?id=7").is_some());
        });
    }

    #[test]
    fn test_unknown_target_resolves_to_none() {
        assert!(embedded_content("/nope").is_none());
    }
}
