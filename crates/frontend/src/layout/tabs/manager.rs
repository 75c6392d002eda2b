//! Reactive tab manager.
//!
//! Owns one dashboard's [`TabSet`] in a signal and drives the bounded
//! readiness poll against the dashboard's embedded host. Each dashboard
//! variant instantiates its own manager; nothing is shared across
//! instances.

use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use super::state::{PollStep, PollTicket, TabSet};
use crate::layout::menu::MenuGroup;
use crate::shared::embedded::EmbeddedHost;

/// Poll period of the readiness check.
pub const POLL_INTERVAL_MS: u32 = 100;
/// Attempt budget per open/refresh; once exhausted the tab is marked
/// failed instead of spinning forever.
pub const MAX_POLL_ATTEMPTS: u32 = 300;

#[derive(Clone, Copy)]
pub struct TabManager {
    tabs: RwSignal<TabSet>,
    host: StoredValue<Rc<dyn EmbeddedHost>, LocalStorage>,
    alive: StoredValue<bool>,
}

impl TabManager {
    pub fn new(host: Rc<dyn EmbeddedHost>) -> Self {
        Self {
            tabs: RwSignal::new(TabSet::new()),
            host: StoredValue::new_local(host),
            alive: StoredValue::new(true),
        }
    }

    /// The open-tab sequence and selection, for views to track.
    pub fn state(&self) -> RwSignal<TabSet> {
        self.tabs
    }

    pub fn open(&self, target: &str, label: &str) {
        log!("open_tab: target='{}', label='{}'", target, label);
        let ticket = self.tabs.try_update(|tabs| tabs.open(target, label)).flatten();
        if let Some(ticket) = ticket {
            self.start_poll(ticket);
        }
    }

    pub fn select(&self, target: &str) {
        self.tabs.update(|tabs| {
            tabs.select(target);
        });
    }

    /// Close `target`. The in-flight poll, if any, dies with the entry's
    /// epoch; there is no timer handle to clear.
    pub fn close(&self, target: &str) {
        log!("close_tab: target='{}'", target);
        self.tabs.update(|tabs| {
            tabs.close(target);
        });
    }

    pub fn refresh(&self, target: &str) {
        log!("refresh_tab: target='{}'", target);
        let ticket = self.tabs.try_update(|tabs| tabs.refresh(target)).flatten();
        if let Some(ticket) = ticket {
            self.host.with_value(|host| host.reload(&ticket.target));
            self.start_poll(ticket);
        }
    }

    /// Stop every outstanding poll. Called from the owning shell's
    /// `on_cleanup`; polls also stop on their own once the signals are
    /// disposed, this just cuts them off at the next tick.
    pub fn shutdown(&self) {
        let _ = self.alive.try_update_value(|alive| *alive = false);
    }

    /// Restore the active tab from `?active=` and keep the URL in sync
    /// with the selection from then on.
    pub fn init_url_sync(&self, menu: &[MenuGroup]) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(target) = params.get("active") {
            let label = crate::layout::menu::find_label(menu, target)
                .map(str::to_string)
                .unwrap_or_else(|| target.clone());
            self.open(target, &label);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active) = this.tabs.with(|tabs| tabs.selected().map(str::to_string)) else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active".to_string(), active)]))
                .unwrap_or_default();
            let new_url = format!("?{}", query);
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    fn start_poll(&self, ticket: PollTicket) {
        let mgr = *self;
        spawn_local(async move {
            for _ in 0..MAX_POLL_ATTEMPTS {
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if !mgr.alive.try_get_value().unwrap_or(false) {
                    return;
                }
                let Some(probe) = mgr.host.try_with_value(|host| host.probe(&ticket.target))
                else {
                    return;
                };
                // try_update: the owning shell may have been disposed while
                // the timer was pending.
                let Some(step) = mgr.tabs.try_update(|tabs| tabs.apply_probe(&ticket, probe))
                else {
                    return;
                };
                match step {
                    PollStep::Continue => {}
                    PollStep::Settled | PollStep::Cancelled => return,
                }
            }
            log!("poll budget exhausted: target='{}'", ticket.target);
            let _ = mgr.tabs.try_update(|tabs| tabs.give_up(&ticket));
        });
    }
}
