//! 管理控制台 (admin dashboard).

use leptos::prelude::*;

use super::shell::DashboardShell;
use crate::domain::a001_user::mock::generate_users;
use crate::layout::menu::{item, MenuGroup};
use crate::layout::tabs::TabManager;
use crate::shared::components::ui::{Badge, Button, Card};

fn admin_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup::new(
            "Dashboard",
            vec![
                item("概览", "/admin/overview"),
                item("数据分析", "/admin/analytics"),
                item("报表", "/admin/reports"),
            ],
        ),
        MenuGroup::new(
            "用户管理",
            vec![
                item("所有用户", "/admin/users"),
                item("普通用户", "/admin/users?type=normal"),
                item("GM用户", "/admin/users?type=gm"),
            ],
        ),
        MenuGroup::new(
            "Content Management",
            vec![
                item("页面管理", "/admin/content/pages"),
                item("文章管理", "/admin/content/posts"),
                item("媒体管理", "/admin/content/media"),
            ],
        ),
        MenuGroup::new(
            "Settings",
            vec![
                item("常规设置", "/admin/settings/general"),
                item("安全设置", "/admin/settings/security"),
                item("外观设置", "/admin/settings/appearance"),
            ],
        ),
    ]
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <DashboardShell title="管理控制台" menu=admin_menu()>
            <AdminOverview />
        </DashboardShell>
    }
}

/// Default pane while no tab is open: stats, recent users and quick
/// actions.
#[component]
fn AdminOverview() -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");
    let recent_users = generate_users(5);

    let stats = [
        ("总用户", "10,234"),
        ("今日活跃", "1,256"),
        ("系统负载", "65%"),
    ];

    view! {
        <div class="overview">
            <div class="stat-cards">
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <Card title=label>
                                <span class="stat-cards__value">{value}</span>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>

            <Card title="最近登录用户">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"用户名"</th>
                            <th>"邮箱"</th>
                            <th>"类型"</th>
                            <th>"最后登录"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recent_users
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <tr>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>
                                            <Badge>{user.kind.label()}</Badge>
                                        </td>
                                        <td>
                                            {user.last_login.format("%Y-%m-%d %H:%M").to_string()}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </Card>

            <Card title="快捷操作">
                <div class="form-row">
                    <Button on_click=Callback::new(move |_| {
                        tabs_store.open("/admin/users", "所有用户")
                    })>"用户管理"</Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            tabs_store.open("/admin/reports", "报表")
                        })
                    >
                        "查看报表"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            tabs_store.open("/admin/settings/general", "常规设置")
                        })
                    >
                        "系统设置"
                    </Button>
                </div>
            </Card>
        </div>
    }
}
