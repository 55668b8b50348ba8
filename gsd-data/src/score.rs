//! Composite 0-100 score per selected state.
//!
//! Each metric is normalized against its maximum over the whole dataset so
//! scores stay comparable between selections. Water is inverted (less
//! withdrawal scores higher).

use crate::aggregate::group_water;
use gsd_core::rows::{EvRow, SolarRow, WaterRow};
use gsd_core::states::to_abbreviation;
use gsd_core::SelectionSet;
use serde::Serialize;

pub const EV_WEIGHT: f64 = 0.8;
pub const SOLAR_WEIGHT: f64 = 0.6;
pub const WATER_WEIGHT: f64 = 0.2;

/// Color band the score panel uses for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => ScoreBand::Low,
            20..=49 => ScoreBand::Medium,
            _ => ScoreBand::High,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Low => "red",
            ScoreBand::Medium => "#E1CE7A",
            ScoreBand::High => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub state_name: String,
    pub ev_count: f64,
    pub solar_count: f64,
    pub water_usage: f64,
    pub score: u8,
    pub band: ScoreBand,
}

/// Dataset-wide maxima used for normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreMaxima {
    pub ev: f64,
    pub solar: f64,
    pub water: f64,
}

impl ScoreMaxima {
    pub fn from_rows(ev: &[EvRow], solar: &[SolarRow], water: &[WaterRow]) -> Self {
        Self {
            ev: max_of(ev.iter().map(|r| r.registration_count)),
            solar: max_of(solar.iter().map(|r| r.solar)),
            water: max_of(group_water(water, |_| true).into_iter().map(|(_, w)| w)),
        }
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}

/// Weighted score from raw values, rounded and clamped to `0..=100`.
pub fn weighted_score(ev_count: f64, solar_count: f64, water_usage: f64, maxima: &ScoreMaxima) -> u8 {
    let raw = 100.0
        * (EV_WEIGHT * ratio(ev_count, maxima.ev)
            + SOLAR_WEIGHT * ratio(solar_count, maxima.solar)
            + WATER_WEIGHT * (1.0 - ratio(water_usage, maxima.water)));
    raw.round().clamp(0.0, 100.0) as u8
}

/// Score every selected state, in selection order.
///
/// EV and solar values come from the first row for the state; water usage
/// is the state's summed withdrawals. Unresolvable names score on zeros.
pub fn aggregate_score(
    selection: &SelectionSet,
    ev: &[EvRow],
    solar: &[SolarRow],
    water: &[WaterRow],
) -> Vec<ScoreRecord> {
    let maxima = ScoreMaxima::from_rows(ev, solar, water);
    let water_totals = group_water(water, |_| true);

    selection
        .iter()
        .map(|state| {
            let abbrev = to_abbreviation(state);
            let ev_count = ev
                .iter()
                .find(|r| r.state == abbrev)
                .map(|r| r.registration_count)
                .unwrap_or_default();
            let solar_count = solar
                .iter()
                .find(|r| r.state == abbrev)
                .map(|r| r.solar)
                .unwrap_or_default();
            let water_usage = water_totals
                .iter()
                .find(|(code, _)| *code == abbrev)
                .map(|(_, w)| *w)
                .unwrap_or_default();
            let score = weighted_score(ev_count, solar_count, water_usage, &maxima);
            ScoreRecord {
                state_name: state.to_string(),
                ev_count,
                solar_count,
                water_usage,
                score,
                band: ScoreBand::from_score(score),
            }
        })
        .collect()
}
