//! Stacked monthly solar generation for the selected states.

use chrono::NaiveDate;
use gsd_core::rows::SolarAreaRow;
use gsd_core::states::to_abbreviation;
use gsd_core::SelectionSet;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Lower and upper bound of one layer at one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackPoint {
    pub date: NaiveDate,
    pub y0: f64,
    pub y1: f64,
}

/// One state's band in the stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackLayer {
    /// State abbreviation.
    pub key: String,
    pub points: Vec<StackPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarAreaSeries {
    pub dates: Vec<NaiveDate>,
    pub layers: Vec<StackLayer>,
}

impl SolarAreaSeries {
    /// Top of the stack, for the y-axis domain.
    pub fn max_y(&self) -> f64 {
        self.layers
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p.y1))
            .fold(0.0, f64::max)
    }

    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty() || self.dates.is_empty()
    }
}

/// Stack monthly generation for the selected states, one layer per state in
/// selection order. A month missing a state's value contributes zero; a
/// repeated state/month keeps the last value.
pub fn solar_area_series(selection: &SelectionSet, rows: &[SolarAreaRow]) -> SolarAreaSeries {
    let keys: Vec<&str> = selection
        .iter()
        .map(to_abbreviation)
        .filter(|a| !a.is_empty())
        .collect();
    if keys.is_empty() {
        return SolarAreaSeries::default();
    }

    let mut by_date: BTreeMap<NaiveDate, HashMap<&str, f64>> = BTreeMap::new();
    for row in rows.iter().filter(|r| keys.iter().any(|k| *k == r.state)) {
        by_date
            .entry(row.date)
            .or_default()
            .insert(row.state.as_str(), row.count);
    }

    let dates: Vec<NaiveDate> = by_date.keys().copied().collect();
    let mut layers: Vec<StackLayer> = keys
        .iter()
        .map(|k| StackLayer {
            key: k.to_string(),
            points: Vec::with_capacity(dates.len()),
        })
        .collect();

    for (date, values) in &by_date {
        let mut running = 0.0;
        for layer in layers.iter_mut() {
            let value = values.get(layer.key.as_str()).copied().unwrap_or_default();
            layer.points.push(StackPoint {
                date: *date,
                y0: running,
                y1: running + value,
            });
            running += value;
        }
    }

    SolarAreaSeries { dates, layers }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, month: u32, count: f64) -> SolarAreaRow {
        SolarAreaRow {
            state: state.to_string(),
            date: NaiveDate::from_ymd_opt(2020, month, 1).unwrap(),
            count,
        }
    }

    #[test]
    fn test_layers_stack_in_selection_order() {
        let rows = vec![
            row("CA", 2, 10.0),
            row("TX", 1, 4.0),
            row("CA", 1, 6.0),
            row("TX", 2, 5.0),
            row("NV", 1, 100.0),
        ];
        let selection = SelectionSet::from_names(["Texas", "California"]);
        let series = solar_area_series(&selection, &rows);

        assert_eq!(series.dates.len(), 2);
        assert_eq!(series.layers[0].key, "TX");
        assert_eq!(series.layers[1].key, "CA");
        let ca_jan = &series.layers[1].points[0];
        assert_eq!((ca_jan.y0, ca_jan.y1), (4.0, 10.0));
        assert_eq!(series.max_y(), 15.0);
    }

    #[test]
    fn test_missing_month_counts_as_zero() {
        let rows = vec![row("CA", 1, 6.0), row("TX", 2, 5.0)];
        let selection = SelectionSet::from_names(["California", "Texas"]);
        let series = solar_area_series(&selection, &rows);
        let tx_jan = &series.layers[1].points[0];
        assert_eq!((tx_jan.y0, tx_jan.y1), (6.0, 6.0));
        let ca_feb = &series.layers[0].points[1];
        assert_eq!((ca_feb.y0, ca_feb.y1), (0.0, 0.0));
    }

    #[test]
    fn test_empty_selection() {
        let series = solar_area_series(&SelectionSet::new(), &[row("CA", 1, 1.0)]);
        assert!(series.is_empty());
        assert_eq!(series.date_extent(), None);
    }
}
