//! 用户中心 (user center dashboard).

use leptos::prelude::*;

use super::shell::DashboardShell;
use crate::layout::menu::{item, link, MenuGroup};
use crate::layout::tabs::TabManager;
use crate::shared::components::ui::{Button, Card};

fn user_center_menu() -> Vec<MenuGroup> {
    vec![MenuGroup::new(
        "用户中心",
        vec![
            item("项目结构", "/user-center/project-structure"),
            item("个人信息", "/user-center/profile"),
            item("数据分析", "/user-center/analytics"),
            item("设置", "/user-center/settings"),
            link("技术代理", "/tech-agent"),
            item("玩家物品", "/user-center/player-items"),
            item("聊天室", "/user-center/chat-room"),
        ],
    )]
}

#[component]
pub fn UserCenterDashboard() -> impl IntoView {
    view! {
        <DashboardShell title="用户中心" menu=user_center_menu()>
            <UserCenterOverview />
        </DashboardShell>
    }
}

#[component]
fn UserCenterOverview() -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");

    view! {
        <div class="overview">
            <Card title="用户中心" description="管理个人信息、物品和聊天">
                <div class="form-row">
                    <Button on_click=Callback::new(move |_| {
                        tabs_store.open("/user-center/profile", "个人信息")
                    })>"个人信息"</Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            tabs_store.open("/user-center/player-items", "玩家物品")
                        })
                    >
                        "玩家物品"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            tabs_store.open("/user-center/chat-room", "聊天室")
                        })
                    >
                        "聊天室"
                    </Button>
                </div>
            </Card>
        </div>
    }
}
