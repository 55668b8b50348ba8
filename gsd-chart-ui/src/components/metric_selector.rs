//! Icon buttons that switch the metric every chart renders.

use crate::state::AppState;
use gsd_core::Metric;
use dioxus::prelude::*;

#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.metric)();
    let buttons: Vec<(Metric, &'static str, &'static str, &'static str)> = Metric::ALL
        .iter()
        .map(|&m| {
            let class = if m == current { "icon-item icon-clicked" } else { "icon-item" };
            (m, m.button_id(), m.label(), class)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 8px 0;",
            for (metric, id, label, class) in buttons {
                button {
                    key: "{id}",
                    id: "{id}",
                    class: "{class}",
                    onclick: move |_: Event<MouseData>| {
                        state.with_store(|store| store.set_metric(metric));
                    },
                    "{label}"
                }
            }
        }
    }
}
