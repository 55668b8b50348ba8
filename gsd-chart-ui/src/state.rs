//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The `SelectionStore` is the source of truth; `selection`, `focus` and
//! `metric` mirror it for rendering and are refreshed with [`AppState::sync`].

use gsd_core::{Metric, SelectionStore};
use gsd_data::ScoreRecord;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the store. Only the dashboard's event handlers mutate it.
pub type SharedStore = Rc<RefCell<SelectionStore>>;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selection store with every view subscribed (None until loaded)
    pub store: Signal<Option<SharedStore>>,
    /// Whether the datasets are still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Selected state names, in selection order
    pub selection: Signal<Vec<String>>,
    /// State shown in the single-state detail views
    pub focus: Signal<Option<String>>,
    /// Metric every chart renders
    pub metric: Signal<Metric>,
    /// Written by the score view on every selection change
    pub scores: Signal<Vec<ScoreRecord>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(Vec::new()),
            focus: Signal::new(None),
            metric: Signal::new(Metric::default()),
            scores: Signal::new(Vec::new()),
        }
    }

    /// Copy the store's selection and metric into the signals.
    pub fn sync(&mut self, store: &SelectionStore) {
        let current = store.current();
        self.selection.set(current.states().to_vec());
        self.focus.set(current.active().map(str::to_string));
        self.metric.set(store.metric());
    }

    /// Run `f` against the store, then refresh the mirrored signals.
    /// Does nothing before the datasets have loaded.
    pub fn with_store<R>(&mut self, f: impl FnOnce(&mut SelectionStore) -> R) -> Option<R> {
        let store = self.store.peek().as_ref().cloned()?;
        let result = f(&mut store.borrow_mut());
        self.sync(&store.borrow());
        Some(result)
    }
}
