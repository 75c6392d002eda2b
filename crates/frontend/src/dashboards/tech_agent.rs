//! 技术代理 (tech agent dashboard).

use leptos::prelude::*;

use super::shell::DashboardShell;
use crate::layout::menu::{item, link, MenuGroup};

fn tech_agent_menu() -> Vec<MenuGroup> {
    vec![MenuGroup::new(
        "技术代理",
        vec![
            item("概览", "/tech-agent/overview"),
            item("代码管理", "/tech-agent/code"),
            item("服务器管理", "/tech-agent/servers"),
            item("数据库管理", "/tech-agent/databases"),
            item("安全设置", "/tech-agent/security"),
            link("返回用户中心", "/user-center"),
        ],
    )]
}

#[component]
pub fn TechAgentDashboard() -> impl IntoView {
    view! {
        <DashboardShell title="技术代理" menu=tech_agent_menu()>
            <div class="overview">
                <p class="overview__hint">"从左侧菜单打开功能页签"</p>
            </div>
        </DashboardShell>
    }
}
