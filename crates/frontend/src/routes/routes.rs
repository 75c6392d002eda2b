//! Pathname-dispatched routing.
//!
//! The app is CSR with full-page navigations between consoles, so a
//! pathname match at mount is all the routing there is. Registered
//! content paths render as bare documents; these are what the tab panes
//! load into their iframes.

use contracts::system::auth::ConsoleRole;
use leptos::prelude::*;

use crate::dashboards::{AdminDashboard, GmDashboard, TechAgentDashboard, UserCenterDashboard};
use crate::layout::tabs::registry::embedded_content;
use crate::shared::browser::{pathname, search};
use crate::system::auth::guard::RequireConsole;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let path = pathname();

    match path.as_str() {
        "/login" => view! { <LoginPage /> }.into_any(),
        "/admin" => view! {
            <RequireConsole console=ConsoleRole::Admin>
                <AdminDashboard />
            </RequireConsole>
        }
        .into_any(),
        "/gm" => view! {
            <RequireConsole console=ConsoleRole::Gm>
                <GmDashboard />
            </RequireConsole>
        }
        .into_any(),
        "/tech-agent" => view! {
            <RequireConsole console=ConsoleRole::TechAgent>
                <TechAgentDashboard />
            </RequireConsole>
        }
        .into_any(),
        "/user-center" => view! {
            <RequireConsole console=ConsoleRole::User>
                <UserCenterDashboard />
            </RequireConsole>
        }
        .into_any(),
        _ => {
            // Content documents keep their query string (e.g.
            // /admin/users?type=gm) as part of the registry target.
            let target = format!("{}{}", path, search());
            match embedded_content(&target) {
                Some(content) => view! { <main class="embedded-doc">{content}</main> }.into_any(),
                None => view! { <LoginPage /> }.into_any(),
            }
        }
    }
}
