use contracts::system::auth::ConsoleRole;
use leptos::prelude::*;

use super::context::use_auth;
use crate::shared::browser::navigate;

/// Refuses to render a console shell without a sufficient session and
/// redirects to the login page instead.
#[component]
pub fn RequireConsole(console: ConsoleRole, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let allowed = move || {
        auth.with(|check| {
            check
                .session()
                .is_some_and(|session| session.role.can_enter(console))
        })
    };

    view! {
        <Show when=allowed fallback=|| view! { <RedirectToLogin /> }>
            {children()}
        </Show>
    }
}

#[component]
fn RedirectToLogin() -> impl IntoView {
    Effect::new(move |_| navigate("/login"));

    view! { <div class="auth-redirect">"未登录，正在跳转到登录页..."</div> }
}
