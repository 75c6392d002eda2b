use contracts::domain::a001_user::{ManagedUser, UserKind};
use leptos::logging::log;
use leptos::prelude::*;

use super::mock::{filter_users, generate_users};
use crate::shared::components::ui::{Badge, Button, Card, Input, Select};
use crate::shared::list_utils::{clamp_page, page_count, page_slice};

const PER_PAGE: usize = 10;

/// 用户管理: searchable, filterable user list with delete.
///
/// `initial_kind` pre-applies the type filter when the page is opened from
/// a "普通用户" / "GM用户" menu entry.
#[component]
pub fn UserListPage(initial_kind: Option<UserKind>) -> impl IntoView {
    let users = RwSignal::new(generate_users(50));
    let (term, set_term) = signal(String::new());
    let (kind_filter, set_kind_filter) = signal(initial_kind);
    let (page, set_page) = signal(1usize);

    let filtered = Memo::new(move |_| {
        users.with(|users| filter_users(users, kind_filter.get(), &term.get()))
    });
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PER_PAGE));
    let visible = Memo::new(move |_| {
        let filtered = filtered.get();
        let page = clamp_page(page.get(), filtered.len(), PER_PAGE);
        page_slice(&filtered, page, PER_PAGE)
    });

    let delete_user = move |id: u32| {
        users.update(|users| users.retain(|user| user.id != id));
        set_page.update(|page| *page = clamp_page(*page, filtered.get_untracked().len(), PER_PAGE));
    };

    let kind_value = move || match kind_filter.get() {
        None => "all".to_string(),
        Some(UserKind::Normal) => "normal".to_string(),
        Some(UserKind::Gm) => "gm".to_string(),
    };

    view! {
        <div class="page">
            <Card title="用户管理" description="查看和管理平台用户">
                <div class="toolbar">
                    <Input
                        value=term
                        placeholder="搜索用户名或邮箱"
                        on_input=Callback::new(move |value| {
                            set_term.set(value);
                            set_page.set(1);
                        })
                    />
                    <Select
                        options=vec![
                            ("all".to_string(), "全部类型".to_string()),
                            ("normal".to_string(), "普通用户".to_string()),
                            ("gm".to_string(), "GM用户".to_string()),
                        ]
                        value=Signal::derive(kind_value)
                        on_change=Callback::new(move |value: String| {
                            set_kind_filter
                                .set(
                                    match value.as_str() {
                                        "normal" => Some(UserKind::Normal),
                                        "gm" => Some(UserKind::Gm),
                                        _ => None,
                                    },
                                );
                            set_page.set(1);
                        })
                    />
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"用户名"</th>
                            <th>"邮箱"</th>
                            <th>"类型"</th>
                            <th>"最后登录"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|user: &ManagedUser| user.id
                            children=move |user: ManagedUser| {
                                let id = user.id;
                                let email = user.email.clone();
                                let badge_variant = match user.kind {
                                    UserKind::Gm => "warn",
                                    UserKind::Normal => "neutral",
                                };
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>
                                            <Badge variant=badge_variant>{user.kind.label()}</Badge>
                                        </td>
                                        <td>{user.last_login.format("%Y-%m-%d %H:%M").to_string()}</td>
                                        <td>
                                            <Button
                                                variant="secondary"
                                                on_click=Callback::new(move |_| {
                                                    // Mock impersonation, log only.
                                                    log!("impersonate: {}", email);
                                                })
                                            >
                                                "以此身份登录"
                                            </Button>
                                            <Button
                                                variant="danger"
                                                on_click=Callback::new(move |_| delete_user(id))
                                            >
                                                "删除"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="pagination">
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || page.get() <= 1)
                        on_click=Callback::new(move |_| set_page.update(|page| *page -= 1))
                    >
                        "上一页"
                    </Button>
                    <span class="pagination__status">
                        {move || format!("第 {} / {} 页，共 {} 条", page.get(), total_pages.get(), filtered.get().len())}
                    </span>
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || page.get() >= total_pages.get())
                        on_click=Callback::new(move |_| set_page.update(|page| *page += 1))
                    >
                        "下一页"
                    </Button>
                </div>
            </Card>
        </div>
    }
}
