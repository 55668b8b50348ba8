//! Census-region view of the selection, backed by the regional solar dataset.

use gsd_core::rows::RegionSolarRow;
use gsd_core::{Region, SelectionSet};
use serde::Serialize;

/// One region/year cell of solar generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub region: String,
    pub year: i32,
    pub generation: f64,
}

/// A heatmap cell, flagged when its region is touched by the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCell {
    pub region: String,
    pub year: i32,
    pub generation: f64,
    pub selected: bool,
}

/// Region of each selected state, in selection order. States sharing a
/// region repeat it; names without a region are dropped.
pub fn selected_regions(selection: &SelectionSet) -> Vec<Region> {
    selection.iter().filter_map(Region::from_state).collect()
}

fn touches(regions: &[Region], name: &str) -> bool {
    regions.iter().any(|r| r.as_str() == name)
}

/// Regional rows for every region touched by the selection, in dataset order.
pub fn aggregate_region(selection: &SelectionSet, rows: &[RegionSolarRow]) -> Vec<RegionSummary> {
    let regions = selected_regions(selection);
    rows.iter()
        .filter(|r| touches(&regions, &r.region))
        .map(|r| RegionSummary {
            region: r.region.clone(),
            year: r.year,
            generation: r.generation,
        })
        .collect()
}

/// Every regional row, flagged with whether the selection touches its region.
pub fn heatmap_cells(selection: &SelectionSet, rows: &[RegionSolarRow]) -> Vec<RegionCell> {
    let regions = selected_regions(selection);
    rows.iter()
        .map(|r| RegionCell {
            region: r.region.clone(),
            year: r.year,
            generation: r.generation,
            selected: touches(&regions, &r.region),
        })
        .collect()
}

/// Distinct regions and years in order of first appearance, for the heatmap axes.
pub fn region_year_axes(rows: &[RegionSolarRow]) -> (Vec<String>, Vec<i32>) {
    let mut regions: Vec<String> = Vec::new();
    let mut years: Vec<i32> = Vec::new();
    for row in rows {
        if !regions.contains(&row.region) {
            regions.push(row.region.clone());
        }
        if !years.contains(&row.year) {
            years.push(row.year);
        }
    }
    (regions, years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RegionSolarRow> {
        [
            ("West", 2019, 100.0),
            ("South", 2019, 50.0),
            ("West", 2020, 120.0),
            ("Midwest", 2020, 10.0),
        ]
        .into_iter()
        .map(|(region, year, generation)| RegionSolarRow {
            region: region.to_string(),
            year,
            generation,
        })
        .collect()
    }

    #[test]
    fn test_selected_regions_keep_order_and_repeats() {
        let selection = SelectionSet::from_names(["Texas", "California", "Oregon", "Guam"]);
        assert_eq!(
            selected_regions(&selection),
            vec![Region::South, Region::West, Region::West]
        );
    }

    #[test]
    fn test_aggregate_region_filters_to_touched_regions() {
        let selection = SelectionSet::from_names(["California", "Oregon"]);
        let result = aggregate_region(&selection, &rows());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.region == "West"));
        assert_eq!(result[1].year, 2020);
    }

    #[test]
    fn test_aggregate_region_empty_selection() {
        assert!(aggregate_region(&SelectionSet::new(), &rows()).is_empty());
    }

    #[test]
    fn test_heatmap_cells_flag_selection() {
        let selection = SelectionSet::from_names(["Ohio"]);
        let cells = heatmap_cells(&selection, &rows());
        assert_eq!(cells.len(), 4);
        let flagged: Vec<&str> = cells
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.region.as_str())
            .collect();
        assert_eq!(flagged, vec!["Midwest"]);
    }

    #[test]
    fn test_region_year_axes() {
        let (regions, years) = region_year_axes(&rows());
        assert_eq!(regions, vec!["West", "South", "Midwest"]);
        assert_eq!(years, vec![2019, 2020]);
        assert!(regions
            .iter()
            .all(|r| Region::ALL.iter().any(|known| known.as_str() == r.as_str())));
    }
}
