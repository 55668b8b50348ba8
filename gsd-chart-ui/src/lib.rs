//! Shared Dioxus components, view subscribers and D3.js bridge for the
//! green states dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the page's D3.js render functions, dataset fetching
//!   and the map click hook
//! - `state`: Reactive AppState with Dioxus Signals
//! - `views`: one `ViewSubscriber` per chart
//! - `components`: Reusable RSX components (metric buttons, dropdown, score panel, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod views;
