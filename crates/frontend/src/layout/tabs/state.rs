//! Pure open-tab state machine.
//!
//! Everything reactive or asynchronous lives in [`super::manager`]; this
//! module only knows about the ordered tab sequence, the selection and the
//! per-tab load state, so the whole lifecycle is testable without a DOM.

/// Load state of one embedded view.
///
/// `Failed` covers both a probe denial (cross-origin style refusal) and an
/// exhausted poll budget. The original console cleared the spinner on
/// denial as if the load had succeeded; surfacing it as an error state was
/// a deliberate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// One entry in the open-tab sequence. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTab {
    pub target: String,
    pub label: String,
    pub load: LoadState,
    epoch: u64,
}

impl OpenTab {
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }
}

/// What one readiness probe of the embedded host reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Complete,
    Denied,
}

/// Identifies one poll generation of one target.
///
/// Every `open` and `refresh` stamps the tab with a fresh epoch; a ticket
/// whose epoch no longer matches belongs to a cancelled poll and must not
/// mutate anything, even if a tab with the same target was reopened since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTicket {
    pub target: String,
    pub epoch: u64,
}

/// Outcome of applying a probe result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Host still pending, keep polling.
    Continue,
    /// Tab reached `Ready` or `Failed`, stop polling.
    Settled,
    /// Ticket is stale (tab closed, reopened or refreshed), stop polling.
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<OpenTab>,
    selected: Option<String>,
    next_epoch: u64,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[OpenTab] {
        &self.tabs
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, target: &str) -> bool {
        self.selected.as_deref() == Some(target)
    }

    pub fn get(&self, target: &str) -> Option<&OpenTab> {
        self.tabs.iter().find(|tab| tab.target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn stamp(&mut self) -> u64 {
        self.next_epoch += 1;
        self.next_epoch
    }

    /// Open `target`, selecting it. Re-opening an already-open target only
    /// re-selects it and never resets its load state. Returns the ticket of
    /// the poll to start for a newly inserted tab.
    pub fn open(&mut self, target: &str, label: &str) -> Option<PollTicket> {
        if self.get(target).is_some() {
            self.selected = Some(target.to_string());
            return None;
        }
        let epoch = self.stamp();
        self.tabs.push(OpenTab {
            target: target.to_string(),
            label: label.to_string(),
            load: LoadState::Loading,
            epoch,
        });
        self.selected = Some(target.to_string());
        Some(PollTicket {
            target: target.to_string(),
            epoch,
        })
    }

    /// Select an already-open target. No-op if it is not open.
    pub fn select(&mut self, target: &str) -> bool {
        if self.get(target).is_some() {
            self.selected = Some(target.to_string());
            true
        } else {
            false
        }
    }

    /// Close `target`. Closing the selected tab selects the last remaining
    /// tab (last-opened-wins), or nothing if the set becomes empty. The
    /// entry's epoch dies with it, which cancels any in-flight poll.
    pub fn close(&mut self, target: &str) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.target != target);
        if self.tabs.len() == before {
            return false;
        }
        if self.selected.as_deref() == Some(target) {
            self.selected = self.tabs.last().map(|tab| tab.target.clone());
        }
        true
    }

    /// Put an open tab back into `Loading` and hand out a fresh poll
    /// ticket. The epoch bump cancels the previous poll, if any is still
    /// running. No-op on an absent target.
    pub fn refresh(&mut self, target: &str) -> Option<PollTicket> {
        let epoch = self.stamp();
        let tab = self.tabs.iter_mut().find(|tab| tab.target == target)?;
        tab.load = LoadState::Loading;
        tab.epoch = epoch;
        Some(PollTicket {
            target: target.to_string(),
            epoch,
        })
    }

    /// Apply one probe result for the poll identified by `ticket`.
    pub fn apply_probe(&mut self, ticket: &PollTicket, probe: Readiness) -> PollStep {
        let Some(tab) = self
            .tabs
            .iter_mut()
            .find(|tab| tab.target == ticket.target && tab.epoch == ticket.epoch)
        else {
            return PollStep::Cancelled;
        };
        match probe {
            Readiness::Pending => PollStep::Continue,
            Readiness::Complete => {
                tab.load = LoadState::Ready;
                PollStep::Settled
            }
            Readiness::Denied => {
                tab.load = LoadState::Failed;
                PollStep::Settled
            }
        }
    }

    /// Mark the polled tab as failed after the attempt budget ran out.
    /// Stale tickets are ignored, same as in [`Self::apply_probe`].
    pub fn give_up(&mut self, ticket: &PollTicket) {
        if let Some(tab) = self
            .tabs
            .iter_mut()
            .find(|tab| tab.target == ticket.target && tab.epoch == ticket.epoch)
        {
            tab.load = LoadState::Failed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(set: &TabSet) -> Vec<&str> {
        set.tabs().iter().map(|tab| tab.target.as_str()).collect()
    }

    #[test]
    fn test_open_inserts_and_selects() {
        let mut set = TabSet::new();
        let ticket = set.open("/admin/users", "用户管理");
        assert!(ticket.is_some());
        assert_eq!(targets(&set), vec!["/admin/users"]);
        assert_eq!(set.selected(), Some("/admin/users"));
        assert_eq!(set.get("/admin/users").unwrap().load, LoadState::Loading);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut set = TabSet::new();
        let first = set.open("/a", "A").unwrap();
        set.apply_probe(&first, Readiness::Complete);
        set.open("/b", "B");

        // Re-opening /a re-selects it but does not reset its load state or
        // produce a new poll.
        let again = set.open("/a", "A renamed");
        assert!(again.is_none());
        assert_eq!(targets(&set), vec!["/a", "/b"]);
        assert_eq!(set.selected(), Some("/a"));
        assert_eq!(set.get("/a").unwrap().label, "A");
        assert_eq!(set.get("/a").unwrap().load, LoadState::Ready);
    }

    #[test]
    fn test_insertion_order_survives_selection() {
        let mut set = TabSet::new();
        set.open("/a", "A");
        set.open("/b", "B");
        set.select("/a");
        set.open("/c", "C");
        assert_eq!(targets(&set), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_close_selected_picks_last_remaining() {
        let mut set = TabSet::new();
        set.open("/a", "A");
        set.open("/b", "B");
        set.open("/c", "C");
        set.select("/b");
        assert!(set.close("/b"));
        assert_eq!(targets(&set), vec!["/a", "/c"]);
        assert_eq!(set.selected(), Some("/c"));
    }

    #[test]
    fn test_close_unselected_keeps_selection() {
        let mut set = TabSet::new();
        set.open("/a", "A");
        set.open("/b", "B");
        set.select("/a");
        set.close("/b");
        assert_eq!(set.selected(), Some("/a"));
    }

    #[test]
    fn test_close_to_empty() {
        let mut set = TabSet::new();
        set.open("/a", "A");
        assert!(set.close("/a"));
        assert!(set.is_empty());
        assert_eq!(set.selected(), None);
    }

    #[test]
    fn test_close_absent_is_noop() {
        let mut set = TabSet::new();
        set.open("/a", "A");
        assert!(!set.close("/zzz"));
        assert_eq!(targets(&set), vec!["/a"]);
    }

    #[test]
    fn test_select_requires_open() {
        let mut set = TabSet::new();
        set.open("/a", "A");
        assert!(!set.select("/b"));
        assert_eq!(set.selected(), Some("/a"));
    }

    #[test]
    fn test_refresh_resets_loading() {
        let mut set = TabSet::new();
        let ticket = set.open("/a", "A").unwrap();
        assert_eq!(set.apply_probe(&ticket, Readiness::Complete), PollStep::Settled);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Ready);

        let ticket = set.refresh("/a").unwrap();
        assert_eq!(set.get("/a").unwrap().load, LoadState::Loading);
        assert_eq!(set.apply_probe(&ticket, Readiness::Complete), PollStep::Settled);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Ready);
    }

    #[test]
    fn test_refresh_absent_is_noop() {
        let mut set = TabSet::new();
        assert!(set.refresh("/a").is_none());
    }

    #[test]
    fn test_probe_after_close_mutates_nothing() {
        let mut set = TabSet::new();
        let ticket = set.open("/a", "A").unwrap();
        set.close("/a");
        assert_eq!(set.apply_probe(&ticket, Readiness::Complete), PollStep::Cancelled);
        assert!(set.is_empty());
    }

    #[test]
    fn test_stale_probe_ignores_reopened_tab() {
        let mut set = TabSet::new();
        let stale = set.open("/a", "A").unwrap();
        set.close("/a");
        // Same target reopened: the old ticket must not touch it.
        set.open("/a", "A");
        assert_eq!(set.apply_probe(&stale, Readiness::Complete), PollStep::Cancelled);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Loading);
    }

    #[test]
    fn test_refresh_cancels_previous_poll() {
        let mut set = TabSet::new();
        let old = set.open("/a", "A").unwrap();
        let new = set.refresh("/a").unwrap();
        assert_eq!(set.apply_probe(&old, Readiness::Complete), PollStep::Cancelled);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Loading);
        assert_eq!(set.apply_probe(&new, Readiness::Complete), PollStep::Settled);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Ready);
    }

    #[test]
    fn test_denied_probe_surfaces_failure() {
        let mut set = TabSet::new();
        let ticket = set.open("/a", "A").unwrap();
        assert_eq!(set.apply_probe(&ticket, Readiness::Denied), PollStep::Settled);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Failed);
    }

    #[test]
    fn test_give_up_marks_failed() {
        let mut set = TabSet::new();
        let ticket = set.open("/a", "A").unwrap();
        set.give_up(&ticket);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Failed);
    }

    #[test]
    fn test_give_up_with_stale_ticket_is_noop() {
        let mut set = TabSet::new();
        let stale = set.open("/a", "A").unwrap();
        let fresh = set.refresh("/a").unwrap();
        set.give_up(&stale);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Loading);
        set.apply_probe(&fresh, Readiness::Complete);
        assert_eq!(set.get("/a").unwrap().load, LoadState::Ready);
    }

    #[test]
    fn test_pending_probe_continues() {
        let mut set = TabSet::new();
        let ticket = set.open("/a", "A").unwrap();
        assert_eq!(set.apply_probe(&ticket, Readiness::Pending), PollStep::Continue);
        assert!(set.get("/a").unwrap().is_loading());
    }

    #[test]
    fn test_user_management_scenario() {
        let mut set = TabSet::new();
        set.open("/admin/users", "用户管理");
        set.open("/admin/analytics", "数据分析");
        set.select("/admin/users");
        set.close("/admin/analytics");
        assert_eq!(targets(&set), vec!["/admin/users"]);
        assert_eq!(set.selected(), Some("/admin/users"));
    }
}
