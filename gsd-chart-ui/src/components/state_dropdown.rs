//! Dropdown of the selected states, choosing which one the detail views show.

use crate::state::AppState;
use dioxus::prelude::*;

/// Hidden until at least one state is selected.
#[component]
pub fn StateDropdown() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.selection.read().clone();
    let focus = (state.focus)().unwrap_or_default();

    if selection.is_empty() {
        return rsx! {};
    }

    let on_change = move |evt: Event<FormData>| {
        let name = evt.value();
        if state.with_store(|store| store.focus(&name)) != Some(true) {
            log::warn!("[GSD Debug] dropdown: {} is not selected", name);
        }
    };

    let on_clear = move |_: Event<MouseData>| {
        state.with_store(|store| store.clear());
    };

    rsx! {
        div {
            id: "dropdown-container",
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "state-dropdown",
                style: "font-weight: bold;",
                "State: "
            }
            select {
                id: "state-dropdown",
                onchange: on_change,
                for name in selection.iter() {
                    option {
                        value: "{name}",
                        selected: *name == focus,
                        "{name}"
                    }
                }
            }
            button {
                onclick: on_clear,
                "Clear selection"
            }
        }
    }
}
