//! Command implementations for the green states CLI.
//!
//! Every command reads local copies of the dashboard datasets, runs the same
//! aggregation the charts use and prints a table, or JSON with `--json`.

use clap::{Args, Subcommand};
use gsd_core::{Metric, SelectionSet};
use serde::Serialize;

pub mod regions;
pub mod summary;
pub mod water;

/// Paths to the three per-state datasets.
#[derive(Args, Debug, Clone)]
pub struct StateFiles {
    /// EV registrations CSV (`State,RegistrationCount`)
    #[arg(long)]
    pub ev: String,

    /// Solar generation CSV (`State,solar`)
    #[arg(long)]
    pub solar: String,

    /// Groundwater withdrawals CSV (`State,TotalGroundwaterWithdrawals,...`)
    #[arg(long)]
    pub water: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Per-state EV, solar and water totals, sorted by a metric
    Summary {
        #[command(flatten)]
        files: StateFiles,

        /// Comma-separated full state names; all states when omitted
        #[arg(long, value_delimiter = ',')]
        states: Vec<String>,

        /// Metric to sort by (ev-count, solar-count, water-usage)
        #[arg(short, long, default_value = "ev-count")]
        metric: Metric,

        #[arg(long)]
        json: bool,
    },

    /// Composite 0-100 score for each selected state
    Score {
        #[command(flatten)]
        files: StateFiles,

        /// Comma-separated full state names
        #[arg(long, value_delimiter = ',', required = true)]
        states: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Solar generation by census region and year for the selected states
    Regions {
        /// Regional solar CSV (`Region,Year,Generation`)
        #[arg(long)]
        region_solar: String,

        #[arg(long, value_delimiter = ',')]
        states: Vec<String>,

        /// Show every region, flagging the ones the selection touches
        #[arg(long)]
        all: bool,

        #[arg(long)]
        json: bool,
    },

    /// Monthly solar generation stacked by state
    SolarArea {
        /// Monthly solar CSV (`State,Date,Count`)
        #[arg(long)]
        solar_area: String,

        #[arg(long, value_delimiter = ',', required = true)]
        states: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Irrigation methods per land use as 32-dot allocations
    Dots {
        #[arg(long)]
        water: String,

        #[arg(long)]
        json: bool,
    },

    /// Water withdrawals by use category for one state
    WaterUse {
        #[arg(long)]
        water: String,

        /// Full state name
        #[arg(long)]
        state: String,

        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let output = match command {
        Command::Summary {
            files,
            states,
            metric,
            json,
        } => summary::run_summary(&files, &states, metric, json)?,
        Command::Score { files, states, json } => summary::run_score(&files, &states, json)?,
        Command::Regions {
            region_solar,
            states,
            all,
            json,
        } => regions::run_regions(&region_solar, &states, all, json)?,
        Command::SolarArea {
            solar_area,
            states,
            json,
        } => regions::run_solar_area(&solar_area, &states, json)?,
        Command::Dots { water, json } => water::run_dots(&water, json)?,
        Command::WaterUse { water, state, json } => water::run_water_use(&water, &state, json)?,
    };
    println!("{}", output);
    Ok(())
}

/// Read a dataset file, naming it in the error.
pub(crate) fn read_file(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))
}

pub(crate) fn selection_from(states: &[String]) -> SelectionSet {
    SelectionSet::from_names(
        states
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty()),
    )
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Write `contents` to a fresh file under the system temp dir.
    pub fn fixture(name: &str, contents: &str) -> String {
        let dir = std::env::temp_dir().join(format!("gsd-cmd-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path: PathBuf = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_trims_and_dedupes() {
        let states = vec![" Texas".to_string(), "".to_string(), "Texas".to_string(), "Ohio ".to_string()];
        let selection = selection_from(&states);
        assert_eq!(selection.states(), ["Texas".to_string(), "Ohio".to_string()]);
    }

    #[test]
    fn test_read_file_names_missing_path() {
        let err = read_file("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
