//! TabPane - embedded pane for one open tab.
//!
//! Renders the target in an iframe with a loading overlay / failure
//! notice on top. Inactive panes are hidden, not unmounted, so switching
//! tabs never reloads content.

use leptos::logging::log;
use leptos::prelude::*;

use super::manager::TabManager;
use super::state::{LoadState, OpenTab};
use crate::shared::embedded::IframeHost;

#[component]
pub fn TabPane(tab: OpenTab) -> impl IntoView {
    let tabs_store = use_context::<TabManager>().expect("TabManager context not found");
    let host = use_context::<IframeHost>().expect("IframeHost context not found");

    let target = tab.target.clone();
    log!("TabPane created for '{}'", target);

    let frame_ref = NodeRef::<leptos::html::Iframe>::new();
    let target_for_register = target.clone();
    Effect::new(move |_| {
        if let Some(frame) = frame_ref.get() {
            host.register(&target_for_register, frame);
        }
    });

    let target_for_cleanup = target.clone();
    on_cleanup(move || {
        log!("TabPane destroyed for '{}'", target_for_cleanup);
        host.unregister(&target_for_cleanup);
    });

    let target_for_active = target.clone();
    let is_active =
        Memo::new(move |_| tabs_store.state().with(|tabs| tabs.is_selected(&target_for_active)));

    let target_for_load = target.clone();
    let load = Memo::new(move |_| {
        tabs_store
            .state()
            .with(|tabs| tabs.get(&target_for_load).map(|tab| tab.load))
    });

    let target_for_retry = target.clone();
    let on_retry = move |_| tabs_store.refresh(&target_for_retry);

    view! {
        <div
            class="tab-pane"
            class:tab-pane--hidden=move || !is_active.get()
            data-tab-target=target.clone()
        >
            <Show when=move || load.get() == Some(LoadState::Loading)>
                <div class="tab-pane__overlay">
                    <span class="spinner"></span>
                    <span>"加载中..."</span>
                </div>
            </Show>
            <Show when=move || load.get() == Some(LoadState::Failed)>
                <div class="tab-pane__overlay tab-pane__overlay--error">
                    <span>"页面加载失败"</span>
                    <button class="button button--secondary" on:click=on_retry.clone()>
                        "重试"
                    </button>
                </div>
            </Show>
            <iframe node_ref=frame_ref src=tab.target.clone() title=tab.label.clone()></iframe>
        </div>
    }
}
