//! Embedded view host abstraction.
//!
//! The tab manager never inspects embedded content; it only asks the host
//! whether a target's document has finished loading and tells it to reload
//! the same target on refresh.

pub mod iframe;

pub use iframe::IframeHost;

use crate::layout::tabs::state::Readiness;

/// Renderer-side contract for one dashboard's embedded views.
pub trait EmbeddedHost {
    /// Non-blocking readiness check for `target`.
    fn probe(&self, target: &str) -> Readiness;

    /// Force-reload the same target in place.
    fn reload(&self, target: &str);
}
