use leptos::prelude::*;

use crate::layout::menu::{MenuAction, MenuGroup};
use crate::layout::tabs::TabManager;
use crate::shared::browser::navigate;

/// Sidebar with collapsible menu groups. Clicking an item opens (or
/// re-selects) its tab; the menu itself never navigates.
#[component]
pub fn Sidebar(menu: Vec<MenuGroup>) -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");

    view! {
        <nav class="sidebar">
            {menu
                .into_iter()
                .map(|group| {
                    let (open, set_open) = signal(true);
                    view! {
                        <div class="sidebar__group">
                            <button
                                class="sidebar__group-label"
                                on:click=move |_| set_open.update(|open| *open = !*open)
                            >
                                {group.label}
                            </button>
                            <ul class="sidebar__items" class:hidden=move || !open.get()>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li on:click=move |_| {
                                                match entry.action {
                                                    MenuAction::OpenTab => {
                                                        tabs_store.open(entry.target, entry.label)
                                                    }
                                                    MenuAction::Navigate => navigate(entry.target),
                                                }
                                            }>
                                                <span>{entry.label}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
