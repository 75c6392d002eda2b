use leptos::ev;
use leptos::prelude::*;

use super::manager::TabManager;
use super::state::{LoadState, OpenTab};

/// Horizontal strip of open-tab handles, in insertion order.
#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");
    let tabs = move || tabs_store.state().with(|tabs| tabs.tabs().to_vec());

    view! {
        <div class="tab-strip">
            <For
                each=tabs
                key=|tab| tab.target.clone()
                children=move |tab| view! { <TabHandle tab /> }
            />
        </div>
    }
}

#[component]
fn TabHandle(tab: OpenTab) -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");

    let target = tab.target.clone();
    let target_for_active = target.clone();
    let is_active =
        Memo::new(move |_| tabs_store.state().with(|tabs| tabs.is_selected(&target_for_active)));

    let target_for_load = target.clone();
    let load = Memo::new(move |_| {
        tabs_store
            .state()
            .with(|tabs| tabs.get(&target_for_load).map(|tab| tab.load))
    });

    let target_for_click = target.clone();
    let on_click = move |_| tabs_store.select(&target_for_click);

    let target_for_refresh = target.clone();
    let on_refresh = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.refresh(&target_for_refresh);
    };

    let target_for_close = target.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close(&target_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.label.clone()}</span>
            <Show when=move || load.get() == Some(LoadState::Loading)>
                <span class="tab__spinner" title="加载中">"…"</span>
            </Show>
            <Show when=move || load.get() == Some(LoadState::Failed)>
                <span class="tab__error" title="加载失败">"!"</span>
            </Show>
            <button class="tab__refresh" title="刷新" on:click=on_refresh>"⟳"</button>
            <button class="tab__close" title="关闭" on:click=on_close>"×"</button>
        </div>
    }
}
