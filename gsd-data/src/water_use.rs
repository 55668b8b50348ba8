//! Water withdrawals by use category for a single state (raindrop view).

use gsd_core::rows::WaterRow;
use gsd_core::states::to_abbreviation;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WaterUseCategory {
    Aquaculture,
    Livestock,
    Irrigation,
    PublicSupply,
    Industrial,
    Mining,
}

impl WaterUseCategory {
    /// Display order of the raindrops.
    pub const ALL: [WaterUseCategory; 6] = [
        WaterUseCategory::Aquaculture,
        WaterUseCategory::Livestock,
        WaterUseCategory::Irrigation,
        WaterUseCategory::PublicSupply,
        WaterUseCategory::Industrial,
        WaterUseCategory::Mining,
    ];

    /// Source column in the water dataset.
    pub fn column(&self) -> &'static str {
        match self {
            WaterUseCategory::Aquaculture => "AQ-Wtotl",
            WaterUseCategory::Livestock => "LI-WFrTo",
            WaterUseCategory::Irrigation => "IR-CUsFr",
            WaterUseCategory::PublicSupply => "PT-CUTot",
            WaterUseCategory::Industrial => "IN-Wtotl",
            WaterUseCategory::Mining => "MI-Wtotl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WaterUseCategory::Aquaculture => "Aquaculture",
            WaterUseCategory::Livestock => "Livestock",
            WaterUseCategory::Irrigation => "Irrigation",
            WaterUseCategory::PublicSupply => "Public Supply",
            WaterUseCategory::Industrial => "Industrial",
            WaterUseCategory::Mining => "Mining",
        }
    }

    fn of(&self, row: &WaterRow) -> f64 {
        match self {
            WaterUseCategory::Aquaculture => row.aquaculture,
            WaterUseCategory::Livestock => row.livestock,
            WaterUseCategory::Irrigation => row.irrigation,
            WaterUseCategory::PublicSupply => row.public_supply,
            WaterUseCategory::Industrial => row.industrial,
            WaterUseCategory::Mining => row.mining,
        }
    }
}

/// One raindrop: a category and its withdrawals in Mgal/d.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterUseSlice {
    pub category: WaterUseCategory,
    pub label: &'static str,
    pub value: f64,
}

/// Category totals for one state, in [`WaterUseCategory::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterUseTotals {
    pub state: String,
    pub values: [f64; 6],
}

impl WaterUseTotals {
    pub fn slices(&self) -> Vec<WaterUseSlice> {
        WaterUseCategory::ALL
            .iter()
            .zip(self.values)
            .map(|(&category, value)| WaterUseSlice {
                category,
                label: category.label(),
                value,
            })
            .collect()
    }
}

/// Sum every category per state code, in order of first appearance.
pub fn water_use_by_state(water: &[WaterRow]) -> Vec<WaterUseTotals> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<WaterUseTotals> = Vec::new();
    for row in water {
        let i = *index.entry(row.state.as_str()).or_insert_with(|| {
            totals.push(WaterUseTotals {
                state: row.state.clone(),
                values: [0.0; 6],
            });
            totals.len() - 1
        });
        for (slot, category) in totals[i].values.iter_mut().zip(WaterUseCategory::ALL) {
            *slot += category.of(row);
        }
    }
    totals
}

/// Raindrops for a full state name, or `None` if the name does not
/// resolve or the state has no water rows.
pub fn water_use_breakdown(totals: &[WaterUseTotals], full_name: &str) -> Option<Vec<WaterUseSlice>> {
    let abbrev = to_abbreviation(full_name);
    if abbrev.is_empty() {
        return None;
    }
    totals
        .iter()
        .find(|t| t.state == abbrev)
        .map(WaterUseTotals::slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<WaterRow> {
        vec![
            WaterRow {
                state: "AZ".into(),
                aquaculture: 1.0,
                irrigation: 10.0,
                mining: 2.0,
                ..Default::default()
            },
            WaterRow {
                state: "NM".into(),
                livestock: 4.0,
                ..Default::default()
            },
            WaterRow {
                state: "AZ".into(),
                irrigation: 5.0,
                public_supply: 3.0,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_totals_per_state() {
        let totals = water_use_by_state(&rows());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].state, "AZ");
        assert_eq!(totals[0].values, [1.0, 0.0, 15.0, 3.0, 0.0, 2.0]);
        assert_eq!(totals[1].values[1], 4.0);
    }

    #[test]
    fn test_breakdown_for_state() {
        let totals = water_use_by_state(&rows());
        let slices = water_use_breakdown(&totals, "Arizona").unwrap();
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[2].label, "Irrigation");
        assert_eq!(slices[2].value, 15.0);
        assert_eq!(slices[3].category, WaterUseCategory::PublicSupply);
    }

    #[test]
    fn test_breakdown_misses() {
        let totals = water_use_by_state(&rows());
        assert!(water_use_breakdown(&totals, "Utah").is_none());
        assert!(water_use_breakdown(&totals, "Arizonia").is_none());
    }
}
