use contracts::system::auth::{AuthCheck, ConsoleRole, SessionInfo};
use leptos::prelude::*;

use crate::shared::browser::navigate;
use crate::system::auth::{context::use_auth, storage};

const CONSOLES: [(ConsoleRole, &str); 4] = [
    (ConsoleRole::User, "用户中心"),
    (ConsoleRole::TechAgent, "技术代理"),
    (ConsoleRole::Admin, "管理控制台"),
    (ConsoleRole::Gm, "GM后台"),
];

/// Top bar: console title, backend switcher (切换后台) and the session box
/// with logout.
#[component]
pub fn ConsoleHeader(title: &'static str, session: SessionInfo) -> impl IntoView {
    let auth = use_auth();
    let (switcher_open, set_switcher_open) = signal(false);

    let role = session.role;
    let display_name = session.display_name().to_string();
    let email = session.email.clone();

    let on_logout = move |_| {
        storage::clear_session();
        auth.set(AuthCheck::Anonymous);
        navigate("/login");
    };

    view! {
        <header class="console-header">
            <h1 class="console-header__title">{title}</h1>

            <div class="console-header__actions">
                <div class="switcher">
                    <button
                        class="switcher__toggle"
                        on:click=move |_| set_switcher_open.update(|open| *open = !*open)
                    >
                        "切换后台 ▾"
                    </button>
                    <ul class="switcher__menu" class:hidden=move || !switcher_open.get()>
                        {CONSOLES
                            .into_iter()
                            .filter(|(console, _)| role.can_enter(*console))
                            .map(|(console, label)| {
                                view! {
                                    <li on:click=move |_| navigate(console.home_path())>
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="session-box">
                    <span class="session-box__name">{display_name}</span>
                    <span class="session-box__email">{email}</span>
                    <button class="session-box__logout" on:click=on_logout>
                        "退出登录"
                    </button>
                </div>
            </div>
        </header>
    }
}
