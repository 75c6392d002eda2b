use chrono::NaiveDate;
use contracts::domain::a002_game::Game;
use leptos::prelude::*;

use super::mock::{generate_games, next_game_id};
use crate::shared::components::ui::{Button, Card, Input};
use crate::shared::list_utils::{clamp_page, page_count, page_slice};

const PER_PAGE: usize = 10;

/// 游戏管理: game list with inline create form and delete.
#[component]
pub fn GameListPage() -> impl IntoView {
    let games = RwSignal::new(generate_games(20));
    let (page, set_page) = signal(1usize);
    let (new_name, set_new_name) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());

    let total_pages = Memo::new(move |_| games.with(|games| page_count(games.len(), PER_PAGE)));
    let visible = Memo::new(move |_| {
        games.with(|games| {
            let page = clamp_page(page.get(), games.len(), PER_PAGE);
            page_slice(games, page, PER_PAGE)
        })
    });

    let create_game = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        games.update(|games| {
            let created_at = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
            games.push(Game {
                id: next_game_id(games),
                name,
                description: new_description.get_untracked().trim().to_string(),
                created_at,
            });
        });
        set_new_name.set(String::new());
        set_new_description.set(String::new());
    };

    let delete_game = move |id: u32| {
        games.update(|games| games.retain(|game| game.id != id));
        set_page.update(|page| *page = clamp_page(*page, games.with_untracked(Vec::len), PER_PAGE));
    };

    view! {
        <div class="page">
            <Card title="添加游戏">
                <div class="form-row">
                    <Input
                        label="游戏名称"
                        value=new_name
                        on_input=Callback::new(move |value| set_new_name.set(value))
                    />
                    <Input
                        label="游戏简介"
                        value=new_description
                        on_input=Callback::new(move |value| set_new_description.set(value))
                    />
                    <Button on_click=Callback::new(create_game)>"添加"</Button>
                </div>
            </Card>

            <Card title="游戏列表">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"名称"</th>
                            <th>"简介"</th>
                            <th>"创建日期"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|game: &Game| game.id
                            children=move |game: Game| {
                                let id = game.id;
                                view! {
                                    <tr>
                                        <td>{game.id}</td>
                                        <td>{game.name.clone()}</td>
                                        <td>{game.description.clone()}</td>
                                        <td>{game.created_at.format("%Y-%m-%d").to_string()}</td>
                                        <td>
                                            <Button
                                                variant="danger"
                                                on_click=Callback::new(move |_| delete_game(id))
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
                        {move || format!("第 {} / {} 页", page.get(), total_pages.get())}
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
