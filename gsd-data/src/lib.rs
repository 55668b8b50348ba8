//! Aggregation of the raw dashboard datasets into chart-ready records.
//!
//! Every function here is pure: it takes the current selection and the raw
//! rows and rebuilds its output from scratch.
//!
//! ```
//! use gsd_core::rows::{EvRow, WaterRow};
//! use gsd_core::SelectionSet;
//! use gsd_data::aggregate;
//!
//! let ev = vec![EvRow { state: "CA".into(), registration_count: 100.0 }];
//! let water = vec![WaterRow { state: "CA".into(), ..Default::default() }];
//! let selection = SelectionSet::from_names(["California"]);
//!
//! let summaries = aggregate(&selection, &ev, &[], &water);
//! assert_eq!(summaries[0].ev_count, 100.0);
//! ```

pub mod aggregate;
pub mod dot_matrix;
pub mod emissions;
pub mod region;
pub mod score;
pub mod solar_area;
pub mod water_use;

pub use aggregate::{aggregate, aggregate_all, extent, sort_by_metric, StateSummary};
pub use dot_matrix::{allocate_dots, irrigation_totals, DotAllocation, IrrigationTotals, TOTAL_DOTS};
pub use emissions::EmissionTable;
pub use region::{aggregate_region, heatmap_cells, RegionCell, RegionSummary};
pub use score::{aggregate_score, ScoreBand, ScoreRecord};
pub use solar_area::{solar_area_series, SolarAreaSeries};
pub use water_use::{water_use_breakdown, water_use_by_state, WaterUseSlice, WaterUseTotals};
