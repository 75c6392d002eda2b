use leptos::logging::log;
use leptos::prelude::*;

use crate::system::auth::context::use_auth;

/// Personal info page (个人信息). Nickname edits are local mock state,
/// like every other write in the console.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let email = auth.with_untracked(|check| {
        check
            .session()
            .map(|session| session.email.clone())
            .unwrap_or_default()
    });
    let initial_name = email.split('@').next().unwrap_or_default().to_string();

    let (nickname, set_nickname) = signal(initial_name);
    let (saved, set_saved) = signal(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log!("profile saved: nickname='{}'", nickname.get_untracked());
        set_saved.set(true);
    };

    view! {
        <div class="page page--profile">
            <h2>"个人信息"</h2>
            <form on:submit=on_save>
                <div class="form-group">
                    <label for="profile-email">"邮箱"</label>
                    <input type="email" id="profile-email" value=email disabled />
                </div>
                <div class="form-group">
                    <label for="profile-nickname">"昵称"</label>
                    <input
                        type="text"
                        id="profile-nickname"
                        value=move || nickname.get()
                        on:input=move |ev| {
                            set_nickname.set(event_target_value(&ev));
                            set_saved.set(false);
                        }
                    />
                </div>
                <button type="submit" class="btn-primary">"保存"</button>
                <Show when=move || saved.get()>
                    <span class="form-hint">"已保存"</span>
                </Show>
            </form>
        </div>
    }
}
