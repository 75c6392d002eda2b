use contracts::system::auth::{AuthCheck, ConsoleRole, SessionInfo};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::browser::navigate;
use crate::system::auth::{context::use_auth, storage};

/// Mock credential table. There is no authentication protocol behind the
/// console; these two accounts are the entire user base of the login page.
const ACCOUNTS: [(&str, &str, ConsoleRole); 2] = [
    ("admin@example.com", "111111", ConsoleRole::Admin),
    ("user@example.com", "password", ConsoleRole::User),
];

fn verify(email: &str, password: &str) -> Option<ConsoleRole> {
    ACCOUNTS
        .iter()
        .find(|(account, pass, _)| *account == email && *pass == password)
        .map(|(_, _, role)| *role)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Simulated round-trip; there is no server to talk to.
            TimeoutFuture::new(800).await;

            match verify(&email_val, &password_val) {
                Some(role) => {
                    let info = SessionInfo::new(email_val, role);
                    storage::save_session(&info);
                    auth.set(AuthCheck::Authenticated(info));
                    set_is_loading.set(false);
                    navigate(role.home_path());
                }
                None => {
                    set_error_message.set(Some("邮箱或密码错误".to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"运营管理平台"</h1>
                <h2>"登录您的账户"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"邮箱"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="输入您的邮箱"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"密码"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="输入您的密码"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_known_accounts() {
        assert_eq!(
            verify("admin@example.com", "111111"),
            Some(ConsoleRole::Admin)
        );
        assert_eq!(
            verify("user@example.com", "password"),
            Some(ConsoleRole::User)
        );
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        assert_eq!(verify("admin@example.com", "wrong"), None);
        assert_eq!(verify("nobody@example.com", "111111"), None);
    }
}
