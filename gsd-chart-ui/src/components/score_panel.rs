//! Score list for the selected states.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ScorePanel() -> Element {
    let state = use_context::<AppState>();
    let rows: Vec<(String, u8, String)> = state
        .scores
        .read()
        .iter()
        .map(|r| {
            let style = format!("font-weight: bold; color: {};", r.band.color());
            (r.state_name.clone(), r.score, style)
        })
        .collect();

    rsx! {
        div {
            id: "statesScores",
            style: "margin: 8px 0;",
            if rows.is_empty() {
                p {
                    style: "font-size: 12px; color: #666;",
                    "Select states on the map to see their scores."
                }
            }
            for (name, score, style) in rows {
                div {
                    key: "{name}",
                    style: "display: flex; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid #eee;",
                    span { "{name}" }
                    span { style: "{style}", "{score}" }
                }
            }
        }
    }
}
