//! Shared dashboard chrome.
//!
//! Each console variant (admin, GM, tech agent, user center) is this
//! shell with its own title, menu and overview content. The shell owns
//! the tab manager and the iframe host for its lifetime; leaving the
//! dashboard shuts both down.

use std::rc::Rc;

use leptos::prelude::*;

use crate::layout::menu::MenuGroup;
use crate::layout::tabs::{TabManager, TabPane, TabStrip};
use crate::layout::{ConsoleHeader, Shell, Sidebar};
use crate::shared::embedded::IframeHost;
use crate::system::auth::context::use_auth;

#[component]
pub fn DashboardShell(
    title: &'static str,
    menu: Vec<MenuGroup>,
    /// Overview content, shown while no tab is open.
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    // The route guard only renders the dashboard with a live session.
    let Some(session) = auth.with_untracked(|check| check.session().cloned()) else {
        return view! { <div class="auth-redirect"></div> }.into_any();
    };

    let host = IframeHost::new();
    let tabs_store = TabManager::new(Rc::new(host));
    provide_context(host);
    provide_context(tabs_store);

    tabs_store.init_url_sync(&menu);
    on_cleanup(move || tabs_store.shutdown());

    let header = move || view! { <ConsoleHeader title session=session.clone() /> }.into_any();
    let left = move || view! { <Sidebar menu=menu.clone() /> }.into_any();
    let center = move || {
        let overview = children.clone();
        view! {
            <TabStrip />
            <div class="tab-panes">
                <For
                    each=move || tabs_store.state().with(|tabs| tabs.tabs().to_vec())
                    key=|tab| tab.target.clone()
                    children=move |tab| view! { <TabPane tab /> }
                />
                <Show when=move || {
                    tabs_store.state().with(|tabs| tabs.is_empty())
                }>{overview()}</Show>
            </div>
        }
        .into_any()
    };

    view! { <Shell header left center /> }.into_any()
}
