//! `summary` and `score`: per-state totals and composite scores.

use crate::{read_file, selection_from, to_json, StateFiles};
use gsd_core::loader::{load_ev_rows, load_solar_rows, load_water_rows};
use gsd_core::rows::{EvRow, SolarRow, WaterRow};
use gsd_core::Metric;
use gsd_data::{aggregate, aggregate_all, aggregate_score, sort_by_metric, ScoreRecord, StateSummary};
use log::info;
use std::fmt::Write;

fn load_state_files(files: &StateFiles) -> anyhow::Result<(Vec<EvRow>, Vec<SolarRow>, Vec<WaterRow>)> {
    let ev = load_ev_rows(&read_file(&files.ev)?)?;
    let solar = load_solar_rows(&read_file(&files.solar)?)?;
    let water = load_water_rows(&read_file(&files.water)?)?;
    Ok((ev, solar, water))
}

/// Summaries for the given states (all states when empty), sorted by `metric`.
pub fn run_summary(files: &StateFiles, states: &[String], metric: Metric, json: bool) -> anyhow::Result<String> {
    let (ev, solar, water) = load_state_files(files)?;
    let mut summaries = if states.is_empty() {
        aggregate_all(&ev, &solar, &water)
    } else {
        let selection = selection_from(states);
        let summaries = aggregate(&selection, &ev, &solar, &water);
        if summaries.len() < selection.len() {
            info!(
                "{} of {} selected states have no water rows or did not resolve",
                selection.len() - summaries.len(),
                selection.len()
            );
        }
        summaries
    };
    sort_by_metric(&mut summaries, metric);

    if json {
        to_json(&summaries)
    } else {
        Ok(summary_table(&summaries, metric))
    }
}

pub fn summary_table(summaries: &[StateSummary], metric: Metric) -> String {
    let mut out = format!(
        "{:<22} {:>4} {:>14} {:>14} {:>14}\n",
        "State", "Abbr", "EV Count", "Solar", "Water (Mgal/d)"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<22} {:>4} {:>14.0} {:>14.1} {:>14.2}",
            s.state_name, s.abbreviation, s.ev_count, s.solar_count, s.water_usage
        );
    }
    let _ = write!(out, "{} states, sorted by {}", summaries.len(), metric.axis_label());
    out
}

/// Scores for the given states, in selection order.
pub fn run_score(files: &StateFiles, states: &[String], json: bool) -> anyhow::Result<String> {
    let (ev, solar, water) = load_state_files(files)?;
    let scores = aggregate_score(&selection_from(states), &ev, &solar, &water);
    if json {
        to_json(&scores)
    } else {
        Ok(score_table(&scores))
    }
}

pub fn score_table(scores: &[ScoreRecord]) -> String {
    let mut out = format!("{:<22} {:>5}  {}\n", "State", "Score", "Band");
    for r in scores {
        let _ = writeln!(out, "{:<22} {:>5}  {:?}", r.state_name, r.score, r.band);
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture;

    fn files(prefix: &str) -> StateFiles {
        StateFiles {
            ev: fixture(&format!("{}-ev.csv", prefix), "State,RegistrationCount\nCA,100\nTX,50\nAL,7\n"),
            solar: fixture(&format!("{}-solar.csv", prefix), "State,solar\nCA,10\nTX,20\nAL,500\n"),
            water: fixture(
                &format!("{}-water.csv", prefix),
                "State,TotalGroundwaterWithdrawals\nTX,5\nCA,3\nAL,1\n",
            ),
        }
    }

    #[test]
    fn test_summary_sorted_by_metric() {
        let states = vec!["California".to_string(), "Texas".to_string()];
        let out = run_summary(&files("sum"), &states, Metric::SolarCount, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("Texas"));
        assert!(lines[2].starts_with("California"));
        assert!(lines[3].starts_with("2 states"));
    }

    #[test]
    fn test_summary_all_states_json() {
        let out = run_summary(&files("all"), &[], Metric::EvCount, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["stateName"], "California");
        let alabama = rows.iter().find(|r| r["abbreviation"] == "AL").unwrap();
        assert_eq!(alabama["solarCount"], 0.0);
    }

    #[test]
    fn test_score_in_selection_order() {
        let states = vec!["Texas".to_string(), "California".to_string()];
        let out = run_score(&files("score"), &states, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["stateName"], "Texas");
        assert_eq!(parsed[1]["stateName"], "California");
        assert!(parsed[0]["score"].as_u64().unwrap() <= 100);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut f = files("missing");
        f.water = "/no/such/water.csv".to_string();
        assert!(run_summary(&f, &[], Metric::EvCount, false).is_err());
    }
}
