use std::collections::HashMap;

use js_sys::Reflect;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::HtmlIFrameElement;

use super::EmbeddedHost;
use crate::layout::tabs::state::Readiness;

/// Iframe-backed embedded host.
///
/// Tab panes register their `<iframe>` element on mount and unregister on
/// cleanup; probing a target whose frame is not (yet) registered reports
/// `Pending`. HtmlIFrameElement is not Send+Sync, so the registry is
/// arena-stored locally.
#[derive(Clone, Copy)]
pub struct IframeHost {
    frames: StoredValue<HashMap<String, HtmlIFrameElement>, LocalStorage>,
}

impl IframeHost {
    pub fn new() -> Self {
        Self {
            frames: StoredValue::new_local(HashMap::new()),
        }
    }

    pub fn register(&self, target: &str, frame: HtmlIFrameElement) {
        self.frames.update_value(|frames| {
            frames.insert(target.to_string(), frame);
        });
    }

    pub fn unregister(&self, target: &str) {
        // The owning pane may be torn down after the host itself; ignore a
        // disposed arena slot.
        let _ = self.frames.try_update_value(|frames| {
            frames.remove(target);
        });
    }
}

impl Default for IframeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedHost for IframeHost {
    fn probe(&self, target: &str) -> Readiness {
        self.frames
            .try_with_value(|frames| frames.get(target).map(probe_frame))
            .flatten()
            .unwrap_or(Readiness::Pending)
    }

    fn reload(&self, target: &str) {
        let _ = self.frames.try_with_value(|frames| {
            if let Some(frame) = frames.get(target) {
                // Reassigning src to itself forces a reload of the same
                // target without navigating the parent document.
                let src = frame.src();
                frame.set_src(&src);
            }
        });
    }
}

/// Read `contentWindow.document.readyState` defensively.
///
/// A thrown access error (cross-origin embedding) maps to `Denied`, a
/// missing document to `Pending`.
fn probe_frame(frame: &HtmlIFrameElement) -> Readiness {
    let Some(win) = frame.content_window() else {
        return Readiness::Pending;
    };
    let doc = match Reflect::get(win.as_ref(), &JsValue::from_str("document")) {
        Ok(doc) => doc,
        Err(_) => return Readiness::Denied,
    };
    if doc.is_null() || doc.is_undefined() {
        return Readiness::Pending;
    }
    match Reflect::get(&doc, &JsValue::from_str("readyState")) {
        Ok(state) if state.as_string().as_deref() == Some("complete") => Readiness::Complete,
        Ok(_) => Readiness::Pending,
        Err(_) => Readiness::Denied,
    }
}
