//! Irrigation-method dot matrix: each land use is drawn as 32 dots split
//! between micro, sprinkler and gravity irrigation.

use gsd_core::rows::WaterRow;
use serde::Serialize;

/// Dots drawn per land use.
pub const TOTAL_DOTS: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IrrigationMethod {
    Micro,
    Sprinkler,
    Gravity,
}

impl IrrigationMethod {
    pub const ALL: [IrrigationMethod; 3] = [
        IrrigationMethod::Micro,
        IrrigationMethod::Sprinkler,
        IrrigationMethod::Gravity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IrrigationMethod::Micro => "Micro",
            IrrigationMethod::Sprinkler => "Sprinkler",
            IrrigationMethod::Gravity => "Gravity",
        }
    }
}

/// What the irrigated land is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LandUse {
    Residential,
    Agriculture,
    GolfCourses,
}

impl LandUse {
    pub const ALL: [LandUse; 3] = [LandUse::Residential, LandUse::Agriculture, LandUse::GolfCourses];

    /// Column prefix in the water dataset.
    pub fn code(&self) -> &'static str {
        match self {
            LandUse::Residential => "IR",
            LandUse::Agriculture => "IC",
            LandUse::GolfCourses => "IG",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LandUse::Residential => "residential land",
            LandUse::Agriculture => "agriculture",
            LandUse::GolfCourses => "golf courses",
        }
    }
}

/// Number of dots per irrigation method. Sums to [`TOTAL_DOTS`] for any
/// positive input total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotAllocation {
    pub micro: u32,
    pub sprinkler: u32,
    pub gravity: u32,
}

impl DotAllocation {
    pub fn get(&self, method: IrrigationMethod) -> u32 {
        match method {
            IrrigationMethod::Micro => self.micro,
            IrrigationMethod::Sprinkler => self.sprinkler,
            IrrigationMethod::Gravity => self.gravity,
        }
    }

    pub fn total(&self) -> u32 {
        self.micro + self.sprinkler + self.gravity
    }

    /// Share of dots for `method` as a rounded whole percentage.
    pub fn percentage(&self, method: IrrigationMethod) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.get(method) as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Split [`TOTAL_DOTS`] between the three methods in proportion to their values.
///
/// Every method starts with one dot. The remaining dots are handed out by
/// rounded share, then the first largest bucket is decremented until the
/// total is exactly [`TOTAL_DOTS`]. A non-positive total leaves only the
/// starting dots. Negative and non-finite values count as zero.
pub fn allocate_dots(micro: f64, sprinkler: f64, gravity: f64) -> DotAllocation {
    let values = [micro, sprinkler, gravity].map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 });
    let largest = values.iter().copied().fold(0.0, f64::max);
    let mut dots = [1u32; 3];
    if largest <= 0.0 {
        return DotAllocation {
            micro: dots[0],
            sprinkler: dots[1],
            gravity: dots[2],
        };
    }

    // Scaled so the sum cannot overflow to infinity.
    let values = values.map(|v| v / largest);
    let total: f64 = values.iter().sum();

    let floor = dots.len() as u32;
    let remaining_dots = (TOTAL_DOTS - floor) as f64;
    let remaining_share = 1.0 - floor as f64 / TOTAL_DOTS as f64;
    for (slot, value) in dots.iter_mut().zip(values) {
        let share = value / total;
        *slot += (share / remaining_share * remaining_dots).round() as u32;
    }

    let mut sum: u32 = dots.iter().sum();
    while sum > TOTAL_DOTS {
        let max = dots.iter().copied().max().unwrap_or_default();
        if let Some(idx) = dots.iter().position(|&d| d == max) {
            dots[idx] -= 1;
        }
        sum -= 1;
    }

    DotAllocation {
        micro: dots[0],
        sprinkler: dots[1],
        gravity: dots[2],
    }
}

/// Summed irrigation withdrawals for one land use.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationTotals {
    pub land_use: LandUse,
    /// Reported total (`IrTot`), which may differ from the sum of methods.
    pub total: f64,
    pub micro: f64,
    pub sprinkler: f64,
    pub gravity: f64,
}

impl IrrigationTotals {
    pub fn allocate(&self) -> DotAllocation {
        allocate_dots(self.micro, self.sprinkler, self.gravity)
    }
}

/// National irrigation totals per land use, summed over all water rows.
pub fn irrigation_totals(water: &[WaterRow]) -> Vec<IrrigationTotals> {
    LandUse::ALL
        .iter()
        .map(|&land_use| {
            let pick = |r: &WaterRow| match land_use {
                LandUse::Residential => [r.ir_total, r.ir_micro, r.ir_sprinkler, r.ir_surface],
                LandUse::Agriculture => [r.ic_total, r.ic_micro, r.ic_sprinkler, r.ic_surface],
                LandUse::GolfCourses => [r.ig_total, r.ig_micro, r.ig_sprinkler, r.ig_surface],
            };
            let sums = water.iter().map(pick).fold([0.0; 4], |mut acc, v| {
                for (a, x) in acc.iter_mut().zip(v) {
                    *a += x;
                }
                acc
            });
            IrrigationTotals {
                land_use,
                total: sums[0],
                micro: sums[1],
                sprinkler: sums[2],
                gravity: sums[3],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let dots = allocate_dots(1.0, 1.0, 1.0);
        // 1 + round(10.67) = 12 each, 36 total, trimmed from the front
        assert_eq!(
            dots,
            DotAllocation {
                micro: 10,
                sprinkler: 11,
                gravity: 11
            }
        );
    }

    #[test]
    fn test_single_method_keeps_floor_for_others() {
        let dots = allocate_dots(0.0, 50.0, 0.0);
        assert_eq!(
            dots,
            DotAllocation {
                micro: 1,
                sprinkler: 30,
                gravity: 1
            }
        );
    }

    #[test]
    fn test_always_sums_to_total() {
        let cases = [
            (1.0, 2.0, 3.0),
            (0.1, 0.0, 99.9),
            (1234.5, 6789.0, 42.0),
            (7.0, 7.0, 0.0),
            (0.0, 0.0, 1e-9),
            (5.0, 5.0, 5.0),
        ];
        for (m, s, g) in cases {
            assert_eq!(allocate_dots(m, s, g).total(), TOTAL_DOTS, "{} {} {}", m, s, g);
        }
    }

    #[test]
    fn test_huge_values_still_sum_to_total() {
        let dots = allocate_dots(f64::MAX, f64::MAX, 0.0);
        assert_eq!(dots.total(), TOTAL_DOTS);
        assert_eq!(
            dots,
            DotAllocation {
                micro: 15,
                sprinkler: 16,
                gravity: 1
            }
        );
        assert_eq!(allocate_dots(1e308, 0.0, 1e308).total(), TOTAL_DOTS);
    }

    #[test]
    fn test_zero_total_keeps_floor() {
        assert_eq!(allocate_dots(0.0, 0.0, 0.0).total(), 3);
    }

    #[test]
    fn test_percentage() {
        let dots = allocate_dots(0.0, 50.0, 0.0);
        assert_eq!(dots.percentage(IrrigationMethod::Sprinkler), 94);
        assert_eq!(dots.percentage(IrrigationMethod::Micro), 3);
    }

    #[test]
    fn test_irrigation_totals() {
        let water = vec![
            WaterRow {
                state: "CA".into(),
                ir_total: 10.0,
                ir_micro: 2.0,
                ir_sprinkler: 3.0,
                ir_surface: 5.0,
                ic_micro: 1.0,
                ..Default::default()
            },
            WaterRow {
                state: "TX".into(),
                ir_micro: 1.0,
                ig_surface: 4.0,
                ..Default::default()
            },
        ];
        let totals = irrigation_totals(&water);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].land_use, LandUse::Residential);
        assert_eq!(totals[0].total, 10.0);
        assert_eq!(totals[0].micro, 3.0);
        assert_eq!(totals[1].micro, 1.0);
        assert_eq!(totals[2].gravity, 4.0);
        assert_eq!(totals[0].allocate().total(), TOTAL_DOTS);
    }
}
