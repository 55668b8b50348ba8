//! Container div a D3 view renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the view subscriber draws into
    pub id: String,
    /// Hide the container without unmounting it, so the view keeps its element
    #[props(default = false)]
    pub hidden: bool,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let display = if props.hidden { "none" } else { "block" };
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; display: {};",
        props.min_height, display
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
