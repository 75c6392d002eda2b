//! Tab shell.
//!
//! - `state` — pure open-tab state machine (sequence, selection, load state)
//! - `manager` — reactive wrapper driving the readiness poll
//! - `strip` / `page` — tab handles and embedded panes
//! - `registry` — target path → standalone content document

pub mod manager;
pub mod page;
pub mod registry;
pub mod state;
pub mod strip;

pub use manager::TabManager;
pub use page::TabPane;
pub use strip::TabStrip;
