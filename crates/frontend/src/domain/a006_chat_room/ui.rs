use chrono::{DateTime, Utc};
use contracts::domain::a006_chat_message::ChatMessage;
use leptos::prelude::*;

use super::mock::{append_message, seed_messages};
use crate::shared::components::ui::{Button, Card, Input};
use crate::system::auth::context::use_auth;

/// Wall clock via the browser; chrono's own clock is not usable on wasm.
fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or(DateTime::UNIX_EPOCH)
}

/// 聊天室: message list with local echo only.
#[component]
pub fn ChatRoomPage() -> impl IntoView {
    let auth = use_auth();
    let messages = RwSignal::new(seed_messages(now()));
    let (draft, set_draft) = signal(String::new());

    let author = move || {
        auth.with_untracked(|auth| {
            auth.session()
                .map(|session| session.display_name().to_string())
                .unwrap_or_else(|| "访客".to_string())
        })
    };

    let send = move |_| {
        let content = draft.get_untracked();
        let sent = messages
            .try_update(|messages| append_message(messages, &author(), &content, now()))
            .unwrap_or(false);
        if sent {
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="page">
            <Card title="聊天室" description="消息仅在本地回显">
                <ul class="chat">
                    <For
                        each=move || messages.get()
                        key=|message: &ChatMessage| message.id
                        children=move |message: ChatMessage| {
                            view! {
                                <li class="chat__message">
                                    <span class="chat__author">{message.author.clone()}</span>
                                    <span class="chat__time">
                                        {message.sent_at.format("%H:%M:%S").to_string()}
                                    </span>
                                    <p class="chat__content">{message.content.clone()}</p>
                                </li>
                            }
                        }
                    />
                </ul>
                <div class="chat__composer">
                    <Input
                        value=draft
                        placeholder="输入消息"
                        on_input=Callback::new(move |value| set_draft.set(value))
                    />
                    <Button on_click=Callback::new(send)>"发送"</Button>
                </div>
            </Card>
        </div>
    }
}
