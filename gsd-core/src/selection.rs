//! The shared set of selected states and the broadcast that keeps every view in sync.
//!
//! A single [`SelectionStore`] owns the selection and the active metric.
//! Views register as [`ViewSubscriber`]s and are told about every change;
//! none of them hold their own copy of the selection.

use crate::metric::Metric;
use serde::Serialize;

/// Ordered set of selected full state names. Insertion order is kept and
/// the most recently added state is the active one unless focus moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSet {
    states: Vec<String>,
    focus: Option<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from names in order, ignoring repeats.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            let name = name.into();
            if !set.contains(&name) {
                set.states.push(name);
            }
        }
        set
    }

    /// Add the state if absent, remove it if present. Returns `true` if the
    /// state is selected afterwards.
    pub fn toggle(&mut self, state: &str) -> bool {
        self.focus = None;
        if let Some(idx) = self.states.iter().position(|s| s == state) {
            self.states.remove(idx);
            false
        } else {
            self.states.push(state.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.focus = None;
    }

    /// Point single-state detail views at a member. Ignored for non-members.
    pub fn set_focus(&mut self, state: &str) -> bool {
        if self.contains(state) {
            self.focus = Some(state.to_string());
            true
        } else {
            false
        }
    }

    /// State shown by single-state detail views: the focused member, or the
    /// most recently added one.
    pub fn active(&self) -> Option<&str> {
        self.focus
            .as_deref()
            .or_else(|| self.states.last().map(String::as_str))
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Lifecycle of a view. Views are constructed once the data has loaded and
/// move to `Rendered` on their first notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Uninitialized,
    Initialized,
    Rendered,
}

/// A chart that redraws when the selection or metric changes.
///
/// Both callbacks run synchronously and must be idempotent: calling one
/// twice with the same value leaves the view in the same state. They
/// receive plain values and cannot reach back into the store.
pub trait ViewSubscriber {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn on_selection_changed(&mut self, selection: &SelectionSet);

    fn on_metric_changed(&mut self, metric: Metric);

    fn phase(&self) -> ViewPhase;
}

/// Single source of truth for the selection and the active metric.
#[derive(Default)]
pub struct SelectionStore {
    selection: SelectionSet,
    metric: Metric,
    subscribers: Vec<Box<dyn ViewSubscriber>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view and bring it up to date with the current metric and selection.
    pub fn subscribe(&mut self, mut subscriber: Box<dyn ViewSubscriber>) {
        log::debug!("[GSD Debug] selection: subscribing {}", subscriber.name());
        subscriber.on_metric_changed(self.metric);
        subscriber.on_selection_changed(&self.selection);
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn current(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Add or remove a state and notify every view. Returns `true` if the
    /// state is selected afterwards.
    pub fn toggle(&mut self, state: &str) -> bool {
        let selected = self.selection.toggle(state);
        log::info!(
            "[GSD Debug] selection: {} {} ({} selected)",
            if selected { "added" } else { "removed" },
            state,
            self.selection.len()
        );
        self.broadcast_selection();
        selected
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        self.broadcast_selection();
    }

    /// Move detail-view focus to a selected state. Non-members are ignored
    /// and trigger no broadcast.
    pub fn focus(&mut self, state: &str) -> bool {
        if self.selection.set_focus(state) {
            self.broadcast_selection();
            true
        } else {
            false
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
        log::info!("[GSD Debug] selection: metric is now {}", metric);
        for subscriber in self.subscribers.iter_mut() {
            subscriber.on_metric_changed(metric);
        }
    }

    fn broadcast_selection(&mut self) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber.on_selection_changed(&self.selection);
        }
    }

    /// Lifecycle phase of every view, in subscription order.
    pub fn phases(&self) -> Vec<(String, ViewPhase)> {
        self.subscribers
            .iter()
            .map(|s| (s.name().to_string(), s.phase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Selection(Vec<String>),
        Metric(Metric),
    }

    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
        phase: ViewPhase,
    }

    impl ViewSubscriber for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn on_selection_changed(&mut self, selection: &SelectionSet) {
            self.phase = ViewPhase::Rendered;
            self.events
                .borrow_mut()
                .push(Event::Selection(selection.states().to_vec()));
        }

        fn on_metric_changed(&mut self, metric: Metric) {
            self.phase = ViewPhase::Rendered;
            self.events.borrow_mut().push(Event::Metric(metric));
        }

        fn phase(&self) -> ViewPhase {
            self.phase
        }
    }

    fn store_with_recorder() -> (SelectionStore, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = SelectionStore::new();
        store.subscribe(Box::new(Recorder {
            events: events.clone(),
            phase: ViewPhase::Initialized,
        }));
        (store, events)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = SelectionSet::new();
        assert!(set.toggle("Texas"));
        assert!(set.toggle("Ohio"));
        assert!(!set.toggle("Texas"));
        assert_eq!(set.states(), &["Ohio".to_string()]);
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let mut set = SelectionSet::from_names(["California", "Texas", "Maine"]);
        let before = set.clone();
        set.toggle("Ohio");
        set.toggle("Ohio");
        assert_eq!(set, before);

        // Removing and re-adding an existing member moves it to the end.
        set.toggle("California");
        set.toggle("California");
        assert_eq!(
            set.states(),
            &["Texas".to_string(), "Maine".to_string(), "California".to_string()]
        );
    }

    #[test]
    fn test_from_names_drops_repeats() {
        let set = SelectionSet::from_names(["Utah", "Iowa", "Utah"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_active_follows_last_added_and_focus() {
        let mut set = SelectionSet::from_names(["Utah", "Iowa"]);
        assert_eq!(set.active(), Some("Iowa"));
        assert!(set.set_focus("Utah"));
        assert_eq!(set.active(), Some("Utah"));
        assert!(!set.set_focus("Texas"));
        assert_eq!(set.active(), Some("Utah"));
        set.toggle("Texas");
        assert_eq!(set.active(), Some("Texas"));
        set.clear();
        assert_eq!(set.active(), None);
    }

    #[test]
    fn test_subscribe_syncs_new_view() {
        let (store, events) = store_with_recorder();
        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(
            *events.borrow(),
            vec![Event::Metric(Metric::EvCount), Event::Selection(vec![])]
        );
        assert_eq!(
            store.phases(),
            vec![("recorder".to_string(), ViewPhase::Rendered)]
        );
    }

    #[test]
    fn test_every_toggle_broadcasts() {
        let (mut store, events) = store_with_recorder();
        events.borrow_mut().clear();

        store.toggle("California");
        store.toggle("Texas");
        store.toggle("California");

        assert_eq!(
            *events.borrow(),
            vec![
                Event::Selection(vec!["California".into()]),
                Event::Selection(vec!["California".into(), "Texas".into()]),
                Event::Selection(vec!["Texas".into()]),
            ]
        );
    }

    #[test]
    fn test_metric_change_broadcasts() {
        let (mut store, events) = store_with_recorder();
        events.borrow_mut().clear();
        store.set_metric(Metric::WaterUsage);
        assert_eq!(store.metric(), Metric::WaterUsage);
        assert_eq!(*events.borrow(), vec![Event::Metric(Metric::WaterUsage)]);
    }

    #[test]
    fn test_focus_on_non_member_is_silent() {
        let (mut store, events) = store_with_recorder();
        store.toggle("Nevada");
        events.borrow_mut().clear();
        assert!(!store.focus("Oregon"));
        assert!(events.borrow().is_empty());
        assert!(store.focus("Nevada"));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_clear_broadcasts_empty_selection() {
        let (mut store, events) = store_with_recorder();
        store.toggle("Nevada");
        store.clear();
        assert!(store.current().is_empty());
        assert_eq!(events.borrow().last(), Some(&Event::Selection(vec![])));
    }
}
