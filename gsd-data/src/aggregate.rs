//! Per-state merge of the EV, solar and water datasets.
//!
//! Every call rebuilds its summaries from the raw rows. The water dataset
//! decides which states appear and in what order: a state with EV or solar
//! rows but no water rows is left out of the result. It is unclear whether
//! the dashboard relied on water being the anchor on purpose, so the
//! behavior is kept as is.

use gsd_core::rows::{EvRow, SolarRow, WaterRow};
use gsd_core::states::{to_abbreviation, to_full_name};
use gsd_core::{Metric, SelectionSet};
use serde::Serialize;
use std::collections::HashMap;

/// State whose solar total is always reported as zero.
pub const SOLAR_OVERRIDE_STATE: &str = "Alabama";

/// Totals for one state across the three metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    /// Full state name, empty if the water dataset used an unknown code.
    pub state_name: String,
    pub abbreviation: String,
    pub ev_count: f64,
    pub solar_count: f64,
    pub water_usage: f64,
}

impl StateSummary {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::EvCount => self.ev_count,
            Metric::SolarCount => self.solar_count,
            Metric::WaterUsage => self.water_usage,
        }
    }
}

/// Sum water withdrawals per state code in order of first appearance.
pub(crate) fn group_water<'a>(
    water: &'a [WaterRow],
    keep: impl Fn(&str) -> bool,
) -> Vec<(&'a str, f64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, f64)> = Vec::new();
    for row in water.iter().filter(|r| keep(r.state.as_str())) {
        match index.get(row.state.as_str()) {
            Some(&i) => groups[i].1 += row.total_groundwater_withdrawals,
            None => {
                index.insert(row.state.as_str(), groups.len());
                groups.push((row.state.as_str(), row.total_groundwater_withdrawals));
            }
        }
    }
    groups
}

fn sum_by_state<'a, T>(
    rows: &'a [T],
    state: impl Fn(&'a T) -> &'a str,
    value: impl Fn(&T) -> f64,
) -> HashMap<&'a str, f64> {
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for row in rows {
        *sums.entry(state(row)).or_default() += value(row);
    }
    sums
}

fn merge(groups: Vec<(&str, f64)>, ev: &[EvRow], solar: &[SolarRow]) -> Vec<StateSummary> {
    let ev_sums = sum_by_state(ev, |r| r.state.as_str(), |r| r.registration_count);
    let solar_sums = sum_by_state(solar, |r| r.state.as_str(), |r| r.solar);

    groups
        .into_iter()
        .map(|(abbrev, water_usage)| {
            let state_name = to_full_name(abbrev);
            let solar_count = if state_name == SOLAR_OVERRIDE_STATE {
                0.0
            } else {
                solar_sums.get(abbrev).copied().unwrap_or_default()
            };
            StateSummary {
                state_name: state_name.to_string(),
                abbreviation: abbrev.to_string(),
                ev_count: ev_sums.get(abbrev).copied().unwrap_or_default(),
                solar_count,
                water_usage,
            }
        })
        .collect()
}

/// Summaries for the selected states.
///
/// Names that do not resolve to an abbreviation are skipped. Output follows
/// the order of the water dataset, not the selection.
pub fn aggregate(
    selection: &SelectionSet,
    ev: &[EvRow],
    solar: &[SolarRow],
    water: &[WaterRow],
) -> Vec<StateSummary> {
    let wanted: Vec<&str> = selection
        .iter()
        .map(to_abbreviation)
        .filter(|a| !a.is_empty())
        .collect();
    let groups = group_water(water, |state| wanted.iter().any(|a| *a == state));
    let summaries = merge(groups, ev, solar);
    log::debug!(
        "[GSD Debug] aggregate: {} selected, {} summaries",
        selection.len(),
        summaries.len()
    );
    summaries
}

/// Summaries for every state in the water dataset (choropleth map).
pub fn aggregate_all(ev: &[EvRow], solar: &[SolarRow], water: &[WaterRow]) -> Vec<StateSummary> {
    merge(group_water(water, |_| true), ev, solar)
}

/// Smallest and largest value of `metric`, or `None` for no summaries.
pub fn extent(summaries: &[StateSummary], metric: Metric) -> Option<(f64, f64)> {
    summaries.iter().map(|s| s.value(metric)).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Sort descending by `metric` for bar display. Ties keep their order.
pub fn sort_by_metric(summaries: &mut [StateSummary], metric: Metric) {
    summaries.sort_by(|a, b| {
        b.value(metric)
            .partial_cmp(&a.value(metric))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
