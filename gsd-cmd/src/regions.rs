//! `regions` and `solar-area`: the solar views of the selection.

use crate::{read_file, selection_from, to_json};
use gsd_core::loader::{load_region_solar_rows, load_solar_area_rows};
use gsd_data::region::selected_regions;
use gsd_data::{aggregate_region, heatmap_cells, solar_area_series, SolarAreaSeries};
use std::fmt::Write;

pub fn run_regions(path: &str, states: &[String], all: bool, json: bool) -> anyhow::Result<String> {
    let rows = load_region_solar_rows(&read_file(path)?)?;
    let selection = selection_from(states);

    if all {
        let cells = heatmap_cells(&selection, &rows);
        if json {
            return to_json(&cells);
        }
        let mut out = format!("{:<10} {:>6} {:>14} {}\n", "Region", "Year", "Generation", "Selected");
        for c in &cells {
            let _ = writeln!(
                out,
                "{:<10} {:>6} {:>14.1} {}",
                c.region,
                c.year,
                c.generation,
                if c.selected { "*" } else { "" }
            );
        }
        return Ok(out.trim_end().to_string());
    }

    let summaries = aggregate_region(&selection, &rows);
    if json {
        return to_json(&summaries);
    }
    let regions: Vec<&str> = selected_regions(&selection).iter().map(|r| r.as_str()).collect();
    let mut out = format!("Regions: {}\n", regions.join(", "));
    let _ = writeln!(out, "{:<10} {:>6} {:>14}", "Region", "Year", "Generation");
    for s in &summaries {
        let _ = writeln!(out, "{:<10} {:>6} {:>14.1}", s.region, s.year, s.generation);
    }
    Ok(out.trim_end().to_string())
}

pub fn run_solar_area(path: &str, states: &[String], json: bool) -> anyhow::Result<String> {
    let rows = load_solar_area_rows(&read_file(path)?)?;
    let series = solar_area_series(&selection_from(states), &rows);
    if json {
        to_json(&series)
    } else {
        Ok(solar_area_table(&series))
    }
}

/// One line per month with each state's value and the stack total.
pub fn solar_area_table(series: &SolarAreaSeries) -> String {
    let mut out = format!("{:<9}", "Month");
    for layer in &series.layers {
        let _ = write!(out, " {:>10}", layer.key);
    }
    let _ = writeln!(out, " {:>10}", "Total");
    for (i, date) in series.dates.iter().enumerate() {
        let _ = write!(out, "{:<9}", date.format("%b %Y").to_string());
        let mut top = 0.0;
        for layer in &series.layers {
            let point = &layer.points[i];
            let _ = write!(out, " {:>10.1}", point.y1 - point.y0);
            top = point.y1;
        }
        let _ = writeln!(out, " {:>10.1}", top);
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture;

    const REGION_CSV: &str = "Region,Year,Generation\nWest,2019,100\nSouth,2019,50\nWest,2020,120\n";

    #[test]
    fn test_regions_for_selection() {
        let path = fixture("regions.csv", REGION_CSV);
        let out = run_regions(&path, &["California".to_string()], false, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Regions: West");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_regions_all_flags_selected() {
        let path = fixture("regions-all.csv", REGION_CSV);
        let out = run_regions(&path, &["Texas".to_string()], true, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[1]["selected"], true);
        assert_eq!(parsed[0]["selected"], false);
    }

    #[test]
    fn test_solar_area_table() {
        let path = fixture(
            "area.csv",
            "State,Date,Count\nCA,Jan 2020,6\nTX,Jan 2020,4\nCA,Feb 2020,10\n",
        );
        let states = vec!["California".to_string(), "Texas".to_string()];
        let out = run_solar_area(&path, &states, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Jan 2020"));
        assert!(lines[1].ends_with("10.0"));
    }
}
