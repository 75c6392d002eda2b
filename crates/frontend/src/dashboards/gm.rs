//! GM后台 (game master dashboard).

use leptos::prelude::*;

use super::shell::DashboardShell;
use crate::layout::menu::{item, MenuGroup};
use crate::layout::tabs::TabManager;
use crate::shared::components::ui::{Button, Card};

fn gm_menu() -> Vec<MenuGroup> {
    vec![MenuGroup::new(
        "GM功能",
        vec![
            item("游戏管理", "/gm/game"),
            item("区服管理", "/gm/game-management"),
            item("玩家管理", "/gm/player-management"),
            item("道具管理", "/gm/items"),
            item("公告管理", "/gm/announcement"),
            item("数据统计", "/gm/statistics"),
            item("系统设置", "/gm/settings"),
            item("开发 API", "/gm/help"),
        ],
    )]
}

#[component]
pub fn GmDashboard() -> impl IntoView {
    view! {
        <DashboardShell title="GM后台" menu=gm_menu()>
            <GmOverview />
        </DashboardShell>
    }
}

#[component]
fn GmOverview() -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");

    view! {
        <div class="overview">
            <Card title="GM后台" description="从左侧菜单打开功能页签">
                <div class="form-row">
                    <Button on_click=Callback::new(move |_| {
                        tabs_store.open("/gm/game", "游戏管理")
                    })>"游戏管理"</Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            tabs_store.open("/gm/game-management", "区服管理")
                        })
                    >
                        "区服管理"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| tabs_store.open("/gm/items", "道具管理"))
                    >
                        "道具管理"
                    </Button>
                </div>
            </Card>
        </div>
    }
}
