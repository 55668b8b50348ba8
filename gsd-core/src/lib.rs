//! Core types for the green states dashboard.
//!
//! This crate provides:
//! - `states`: lookup between state names, abbreviations and census regions
//! - `metric`: the EV / solar / water metric the charts display
//! - `rows` and `loader`: typed dataset rows and their CSV parsers
//! - `selection`: the selection store and the view subscriber contract

pub mod loader;
pub mod metric;
pub mod rows;
pub mod selection;
pub mod states;

pub use loader::{Datasets, RawDatasets};
pub use metric::Metric;
pub use selection::{SelectionSet, SelectionStore, ViewPhase, ViewSubscriber};
pub use states::Region;
