use contracts::domain::a005_player_item::{Backpack, CurrencyBalance, PlayerItem};
use leptos::prelude::*;

use super::mock::{generate_balances, generate_player_items, move_item, set_listing, transfer, TransferError};
use crate::shared::components::ui::{Badge, Button, Card, Input};

/// 玩家物品: two backpacks with move/sell controls plus currency transfer
/// between the online and in-game wallets.
#[component]
pub fn PlayerItemsPage() -> impl IntoView {
    let items = RwSignal::new(generate_player_items());
    let balances = RwSignal::new(generate_balances());
    let (transfer_amount, set_transfer_amount) = signal(String::new());
    let (transfer_error, set_transfer_error) = signal(Option::<TransferError>::None);

    let move_one = move |id: u32| {
        items.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                // Listed items refuse to move; the button is hidden for
                // them, so the Err case is unreachable from the UI.
                let _ = move_item(item);
            }
        });
    };

    let toggle_listing = move |id: u32| {
        items.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                let price = if item.is_listed() { None } else { Some(item.quantity.max(1) * 100) };
                set_listing(item, price);
            }
        });
    };

    let run_transfer = move |balance_id: u32, to_game: bool| {
        let amount = transfer_amount.get_untracked().trim().parse::<u64>().unwrap_or(0);
        let mut outcome = Ok(());
        balances.update(|balances| {
            if let Some(balance) = balances.iter_mut().find(|balance| balance.id == balance_id) {
                outcome = transfer(balance, to_game, amount);
            }
        });
        set_transfer_error.set(outcome.err());
    };

    let backpack_card = move |location: Backpack| {
        view! {
            <Card title=location.label()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"名称"</th>
                            <th>"数量"</th>
                            <th>"状态"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || {
                                items
                                    .get()
                                    .into_iter()
                                    .filter(|item| item.location == location)
                                    .collect::<Vec<_>>()
                            }
                            key=|item: &PlayerItem| (item.id, item.list_price)
                            children=move |item: PlayerItem| {
                                let id = item.id;
                                let listed = item.is_listed();
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.quantity}</td>
                                        <td>
                                            {if let Some(price) = item.list_price {
                                                view! {
                                                    <Badge variant="warn">
                                                        {format!("已上架 {}金币", price)}
                                                    </Badge>
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <Badge>"未上架"</Badge> }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            <Show when=move || !listed>
                                                <Button
                                                    variant="secondary"
                                                    on_click=Callback::new(move |_| move_one(id))
                                                >
                                                    {format!("移至{}", location.other().label())}
                                                </Button>
                                            </Show>
                                            <Button on_click=Callback::new(move |_| toggle_listing(id))>
                                                {if listed { "下架" } else { "上架出售" }}
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Card>
        }
    };

    view! {
        <div class="page">
            <div class="columns">
                {backpack_card(Backpack::Online)} {backpack_card(Backpack::InGame)}
            </div>

            <Card title="货币转移" description="在在线钱包和游戏钱包之间转移货币">
                <div class="form-row">
                    <Input
                        label="转移数量"
                        value=transfer_amount
                        on_input=Callback::new(move |value| {
                            set_transfer_amount.set(value);
                            set_transfer_error.set(None);
                        })
                    />
                    {move || {
                        transfer_error
                            .get()
                            .map(|error| {
                                view! { <Badge variant="warn">{error.message()}</Badge> }
                            })
                    }}
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"货币"</th>
                            <th>"在线钱包"</th>
                            <th>"游戏钱包"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || balances.get()
                            key=|balance: &CurrencyBalance| {
                                (balance.id, balance.online_amount, balance.game_amount)
                            }
                            children=move |balance: CurrencyBalance| {
                                let id = balance.id;
                                view! {
                                    <tr>
                                        <td>{balance.name.clone()}</td>
                                        <td>{balance.online_amount}</td>
                                        <td>{balance.game_amount}</td>
                                        <td>
                                            <Button
                                                variant="secondary"
                                                on_click=Callback::new(move |_| run_transfer(id, true))
                                            >
                                                "转入游戏"
                                            </Button>
                                            <Button
                                                variant="secondary"
                                                on_click=Callback::new(move |_| run_transfer(id, false))
                                            >
                                                "转出到在线"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Card>
        </div>
    }
}
