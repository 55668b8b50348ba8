//! The metric every view currently renders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which per-state total the charts display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    #[default]
    EvCount,
    SolarCount,
    WaterUsage,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::EvCount, Metric::SolarCount, Metric::WaterUsage];

    /// Map a dashboard icon button id to its metric.
    pub fn from_button_id(id: &str) -> Option<Metric> {
        match id {
            "electric_vehicles" => Some(Metric::EvCount),
            "solar_panels" => Some(Metric::SolarCount),
            "water_button" => Some(Metric::WaterUsage),
            _ => None,
        }
    }

    pub fn button_id(&self) -> &'static str {
        match self {
            Metric::EvCount => "electric_vehicles",
            Metric::SolarCount => "solar_panels",
            Metric::WaterUsage => "water_button",
        }
    }

    /// Field name used in the JSON payloads handed to D3.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::EvCount => "evCount",
            Metric::SolarCount => "solarCount",
            Metric::WaterUsage => "waterUsage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::EvCount => "Electric Vehicles",
            Metric::SolarCount => "Solar Panels",
            Metric::WaterUsage => "Water Conservation",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::EvCount => "EV Registration Count",
            Metric::SolarCount => "Solar Generation (thousand MWh)",
            Metric::WaterUsage => "Water Usage (Mgal/d)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Metric {
    type Err = anyhow::Error;

    /// Accepts the JSON key (`solarCount`) or the kebab-case CLI form (`solar-count`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "evCount" | "ev-count" | "ev" => Ok(Metric::EvCount),
            "solarCount" | "solar-count" | "solar" => Ok(Metric::SolarCount),
            "waterUsage" | "water-usage" | "water" => Ok(Metric::WaterUsage),
            other => anyhow::bail!("unknown metric: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_ids_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_button_id(metric.button_id()), Some(metric));
        }
        assert_eq!(Metric::from_button_id("globe"), None);
    }

    #[test]
    fn test_parse_and_display() {
        let metric: Metric = "solar-count".parse().unwrap();
        assert_eq!(metric, Metric::SolarCount);
        assert_eq!(metric.to_string(), "solarCount");
        assert!("population".parse::<Metric>().is_err());
    }

    #[test]
    fn test_default_is_ev_count() {
        assert_eq!(Metric::default(), Metric::EvCount);
    }
}
