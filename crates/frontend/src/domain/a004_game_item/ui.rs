use std::collections::HashSet;

use contracts::domain::a004_game_item::GameItem;
use leptos::prelude::*;

use super::mock::{generate_items, matches_keywords};
use crate::shared::components::ui::{Badge, Button, Card};
use crate::shared::list_utils::{clamp_page, page_count, page_slice};

const PER_PAGE: usize = 10;
const KEYWORDS: [&str; 5] = ["长剑", "法杖", "护甲", "戒指", "药水"];

/// 物品管理: item list with keyword chips, multi-select and bulk delete.
///
/// `game_id` comes from the `?id=` query of the menu entry; the mock data
/// is the same for every game, so it is only shown in the header.
#[component]
pub fn ItemListPage(game_id: Option<u32>) -> impl IntoView {
    let items = RwSignal::new(generate_items(100));
    let active_keywords = RwSignal::new(Vec::<String>::new());
    let selected = RwSignal::new(HashSet::<u32>::new());
    let (page, set_page) = signal(1usize);

    let filtered = Memo::new(move |_| {
        items.with(|items| {
            active_keywords.with(|keywords| {
                items
                    .iter()
                    .filter(|item| matches_keywords(item, keywords))
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PER_PAGE));
    let visible = Memo::new(move |_| {
        let filtered = filtered.get();
        let page = clamp_page(page.get(), filtered.len(), PER_PAGE);
        page_slice(&filtered, page, PER_PAGE)
    });

    let toggle_keyword = move |keyword: String| {
        active_keywords.update(|keywords| {
            if let Some(at) = keywords.iter().position(|active| *active == keyword) {
                keywords.remove(at);
            } else {
                keywords.push(keyword);
            }
        });
        set_page.set(1);
    };

    let toggle_row = move |id: u32| {
        selected.update(|selected| {
            if !selected.remove(&id) {
                selected.insert(id);
            }
        });
    };

    // Select-all covers the current page only.
    let page_all_selected = Memo::new(move |_| {
        let visible = visible.get();
        !visible.is_empty()
            && selected.with(|selected| visible.iter().all(|item| selected.contains(&item.id)))
    });
    let toggle_page = move |_| {
        let visible = visible.get_untracked();
        let all = page_all_selected.get_untracked();
        selected.update(|selected| {
            for item in &visible {
                if all {
                    selected.remove(&item.id);
                } else {
                    selected.insert(item.id);
                }
            }
        });
    };

    let delete_selected = move |_| {
        let doomed = selected.get_untracked();
        if doomed.is_empty() {
            return;
        }
        items.update(|items| items.retain(|item| !doomed.contains(&item.id)));
        selected.update(HashSet::clear);
        set_page.update(|page| *page = clamp_page(*page, filtered.get_untracked().len(), PER_PAGE));
    };

    let header = match game_id {
        Some(game_id) => format!("物品管理（游戏 {}）", game_id),
        None => "物品管理".to_string(),
    };

    view! {
        <div class="page">
            <Card title=header description="按关键字筛选，支持批量删除">
                <div class="toolbar">
                    <div class="chips">
                        {KEYWORDS
                            .iter()
                            .map(|&keyword| {
                                let active = move || {
                                    active_keywords
                                        .with(|keywords| keywords.iter().any(|k| k == keyword))
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if active() { "chip chip--active" } else { "chip" }
                                        }
                                        on:click=move |_| toggle_keyword(keyword.to_string())
                                    >
                                        {keyword}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Button
                        variant="danger"
                        disabled=Signal::derive(move || selected.with(HashSet::is_empty))
                        on_click=Callback::new(delete_selected)
                    >
                        {move || format!("删除选中（{}）", selected.with(HashSet::len))}
                    </Button>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>
                                <input
                                    type="checkbox"
                                    prop:checked=move || page_all_selected.get()
                                    on:change=toggle_page
                                />
                            </th>
                            <th>"ID"</th>
                            <th>"名称"</th>
                            <th>"品质"</th>
                            <th>"数量"</th>
                            <th>"价格"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|item: &GameItem| item.id
                            children=move |item: GameItem| {
                                let id = item.id;
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    selected.with(|selected| selected.contains(&id))
                                                }
                                                on:change=move |_| toggle_row(id)
                                            />
                                        </td>
                                        <td>{item.id}</td>
                                        <td>{item.name.clone()}</td>
                                        <td>
                                            <Badge>{item.quality.label()}</Badge>
                                        </td>
                                        <td>{item.quantity}</td>
                                        <td>{item.price}</td>
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
