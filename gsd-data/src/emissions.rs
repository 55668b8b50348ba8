//! Country emissions for the globe view.

use gsd_core::rows::{CountryName, EmissionRow};
use serde::Serialize;
use std::collections::HashMap;

/// Value shown for countries without a positive reading. Rendered as `<1000`.
pub const MISSING_EMISSION: f64 = 1000.0;

pub const UNKNOWN_COUNTRY: &str = "No data";

/// Per-country payload for the globe renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEmission {
    pub id: String,
    pub name: String,
    /// `None` when the country has no reading, colored with the domain minimum.
    pub value: Option<f64>,
    pub label: String,
}

/// Lookup tables keyed by numeric country id.
#[derive(Debug, Clone, Default)]
pub struct EmissionTable {
    values: HashMap<String, f64>,
    names: HashMap<String, String>,
}

impl EmissionTable {
    pub fn new(emissions: &[EmissionRow], names: &[CountryName]) -> Self {
        let values = emissions
            .iter()
            .map(|r| (r.country_id.clone(), r.value))
            .collect();
        let names = names
            .iter()
            .map(|n| (n.id.clone(), n.name.clone()))
            .collect();
        Self { values, names }
    }

    /// Raw reading, if the dataset has one.
    pub fn value_for(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Value for tooltips: zero or missing readings fall back to [`MISSING_EMISSION`].
    pub fn display_value(&self, id: &str) -> f64 {
        match self.value_for(id) {
            Some(v) if v != 0.0 => v,
            _ => MISSING_EMISSION,
        }
    }

    pub fn label(&self, id: &str) -> String {
        let value = self.display_value(id);
        if value == MISSING_EMISSION {
            "<1000".to_string()
        } else {
            format!("{}", value)
        }
    }

    pub fn name_for(&self, id: &str) -> &str {
        self.names.get(id).map(String::as_str).unwrap_or(UNKNOWN_COUNTRY)
    }

    /// Min and max reading, for the color domain.
    pub fn extent(&self) -> Option<(f64, f64)> {
        self.values.values().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Payload for every named country, sorted by id.
    pub fn countries(&self) -> Vec<CountryEmission> {
        let mut ids: Vec<&String> = self.names.keys().chain(self.values.keys()).collect();
        ids.sort();
        ids.dedup();
        ids.into_iter()
            .map(|id| CountryEmission {
                id: id.clone(),
                name: self.name_for(id).to_string(),
                value: self.value_for(id).filter(|v| *v != 0.0),
                label: self.label(id),
            })
            .collect()
    }
}
