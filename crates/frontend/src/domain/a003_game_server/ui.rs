use chrono::{DateTime, NaiveDateTime};
use contracts::domain::a003_game_server::{GameServer, ServerStatus};
use leptos::prelude::*;

use super::mock::{generate_servers, next_server_id, toggle_server, verify_cdk};
use crate::shared::components::ui::{Badge, Button, Card, Input};

/// Wall clock via the browser; chrono's own clock is not usable on wasm.
fn now() -> NaiveDateTime {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .naive_utc()
}

/// 游戏区服管理: server list with status toggle, delete, create and a
/// mock CDK verification dialog.
#[component]
pub fn ServerListPage() -> impl IntoView {
    let servers = RwSignal::new(generate_servers(20));
    let (new_name, set_new_name) = signal(String::new());
    let (new_ip, set_new_ip) = signal(String::new());

    // CDK dialog state.
    let (cdk_open, set_cdk_open) = signal(false);
    let (cdk_code, set_cdk_code) = signal(String::new());
    let (cdk_result, set_cdk_result) = signal(Option::<Result<(), &'static str>>::None);

    let create_server = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        let ip = new_ip.get_untracked().trim().to_string();
        if name.is_empty() || ip.is_empty() {
            return;
        }
        servers.update(|servers| {
            servers.push(GameServer {
                id: next_server_id(servers),
                name,
                ip,
                status: ServerStatus::Normal,
                maintenance_until: None,
            });
        });
        set_new_name.set(String::new());
        set_new_ip.set(String::new());
    };

    let toggle_status = move |id: u32| {
        servers.update(|servers| {
            if let Some(server) = servers.iter_mut().find(|server| server.id == id) {
                toggle_server(server, now());
            }
        });
    };

    let delete_server = move |id: u32| {
        servers.update(|servers| servers.retain(|server| server.id != id));
    };

    let submit_cdk = move |_| {
        set_cdk_result.set(Some(verify_cdk(&cdk_code.get_untracked())));
    };

    view! {
        <div class="page">
            <Card title="添加区服">
                <div class="form-row">
                    <Input
                        label="区服名称"
                        value=new_name
                        on_input=Callback::new(move |value| set_new_name.set(value))
                    />
                    <Input
                        label="服务器IP"
                        value=new_ip
                        on_input=Callback::new(move |value| set_new_ip.set(value))
                    />
                    <Button on_click=Callback::new(create_server)>"添加"</Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| {
                            set_cdk_code.set(String::new());
                            set_cdk_result.set(None);
                            set_cdk_open.set(true);
                        })
                    >
                        "CDK验证"
                    </Button>
                </div>
            </Card>

            <Show when=move || cdk_open.get()>
                <div class="dialog">
                    <Card title="CDK验证">
                        <Input
                            label="CDK码"
                            value=cdk_code
                            placeholder="请输入CDK码"
                            on_input=Callback::new(move |value| {
                                set_cdk_code.set(value);
                                set_cdk_result.set(None);
                            })
                        />
                        {move || {
                            cdk_result
                                .get()
                                .map(|result| match result {
                                    Ok(()) => {
                                        view! { <Badge variant="ok">"验证通过"</Badge> }.into_any()
                                    }
                                    Err(message) => {
                                        view! { <Badge variant="warn">{message}</Badge> }.into_any()
                                    }
                                })
                        }}
                        <div class="dialog__actions">
                            <Button on_click=Callback::new(submit_cdk)>"验证"</Button>
                            <Button
                                variant="secondary"
                                on_click=Callback::new(move |_| set_cdk_open.set(false))
                            >
                                "关闭"
                            </Button>
                        </div>
                    </Card>
                </div>
            </Show>

            <Card title="区服列表">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"名称"</th>
                            <th>"IP"</th>
                            <th>"状态"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || servers.get()
                            key=|server: &GameServer| (server.id, server.status)
                            children=move |server: GameServer| {
                                let id = server.id;
                                let (badge_variant, toggle_label) = match server.status {
                                    ServerStatus::Normal => ("ok", "停服维护"),
                                    ServerStatus::Maintenance => ("warn", "恢复运行"),
                                };
                                view! {
                                    <tr>
                                        <td>{server.id}</td>
                                        <td>{server.name.clone()}</td>
                                        <td>{server.ip.clone()}</td>
                                        <td>
                                            <Badge variant=badge_variant>{server.status.label()}</Badge>
                                            {server
                                                .maintenance_until
                                                .map(|until| {
                                                    view! {
                                                        <span class="muted">
                                                            {format!(
                                                                "维护至 {}",
                                                                until.format("%m-%d %H:%M"),
                                                            )}
                                                        </span>
                                                    }
                                                })}
                                        </td>
                                        <td>
                                            <Button
                                                variant="secondary"
                                                on_click=Callback::new(move |_| toggle_status(id))
                                            >
                                                {toggle_label}
                                            </Button>
                                            <Button
                                                variant="danger"
                                                on_click=Callback::new(move |_| delete_server(id))
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
            </Card>
        </div>
    }
}
