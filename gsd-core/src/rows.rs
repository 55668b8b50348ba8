//! Row-level records for each dataset, as they appear in the source CSV files.
//!
//! Numeric columns arrive as strings and are parsed leniently: blank,
//! `null`, `n/a` and other unparsable values count as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Parse a numeric CSV cell, treating blanks and placeholders as zero.
pub fn parse_number(ess: &str) -> f64 {
    let ess_lowered = ess.trim().to_lowercase();
    match ess_lowered.as_str() {
        "null" | "" | "n/a" | "na" => 0.0,
        s => s
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or_default(),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_number(&raw))
}

/// EV registrations: `State,RegistrationCount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "RegistrationCount", default, deserialize_with = "lenient_f64")]
    pub registration_count: f64,
}

/// Solar generation: `State,solar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "solar", default, deserialize_with = "lenient_f64")]
    pub solar: f64,
}

/// Groundwater withdrawals, one row per county.
///
/// Besides the total, carries the six water-use categories shown in the
/// raindrop view and the irrigation-method columns for residential (`IR`),
/// crop (`IC`) and golf course (`IG`) irrigation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "TotalGroundwaterWithdrawals", default, deserialize_with = "lenient_f64")]
    pub total_groundwater_withdrawals: f64,

    #[serde(rename = "AQ-Wtotl", default, deserialize_with = "lenient_f64")]
    pub aquaculture: f64,
    #[serde(rename = "LI-WFrTo", default, deserialize_with = "lenient_f64")]
    pub livestock: f64,
    #[serde(rename = "IR-CUsFr", default, deserialize_with = "lenient_f64")]
    pub irrigation: f64,
    #[serde(rename = "PT-CUTot", default, deserialize_with = "lenient_f64")]
    pub public_supply: f64,
    #[serde(rename = "IN-Wtotl", default, deserialize_with = "lenient_f64")]
    pub industrial: f64,
    #[serde(rename = "MI-Wtotl", default, deserialize_with = "lenient_f64")]
    pub mining: f64,

    #[serde(rename = "IR-IrTot", default, deserialize_with = "lenient_f64")]
    pub ir_total: f64,
    #[serde(rename = "IR-IrMic", default, deserialize_with = "lenient_f64")]
    pub ir_micro: f64,
    #[serde(rename = "IR-IrSpr", default, deserialize_with = "lenient_f64")]
    pub ir_sprinkler: f64,
    #[serde(rename = "IR-IrSur", default, deserialize_with = "lenient_f64")]
    pub ir_surface: f64,

    #[serde(rename = "IC-IrTot", default, deserialize_with = "lenient_f64")]
    pub ic_total: f64,
    #[serde(rename = "IC-IrMic", default, deserialize_with = "lenient_f64")]
    pub ic_micro: f64,
    #[serde(rename = "IC-IrSpr", default, deserialize_with = "lenient_f64")]
    pub ic_sprinkler: f64,
    #[serde(rename = "IC-IrSur", default, deserialize_with = "lenient_f64")]
    pub ic_surface: f64,

    #[serde(rename = "IG-IrTot", default, deserialize_with = "lenient_f64")]
    pub ig_total: f64,
    #[serde(rename = "IG-IrMic", default, deserialize_with = "lenient_f64")]
    pub ig_micro: f64,
    #[serde(rename = "IG-IrSpr", default, deserialize_with = "lenient_f64")]
    pub ig_sprinkler: f64,
    #[serde(rename = "IG-IrSur", default, deserialize_with = "lenient_f64")]
    pub ig_surface: f64,
}

/// Solar generation by census region and year: `Region,Year,Generation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSolarRow {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Generation", default, deserialize_with = "lenient_f64")]
    pub generation: f64,
}

/// Monthly solar generation per state, parsed from `State,Date,Count`
/// where `Date` looks like `Jan 2015`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarAreaRow {
    pub state: String,
    /// First day of the reported month.
    pub date: NaiveDate,
    pub count: f64,
}

/// Raw form of [`SolarAreaRow`] before the month is parsed.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSolarAreaRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Count", default, deserialize_with = "lenient_f64")]
    pub count: f64,
}

/// Parse a `Mon YYYY` month label into the first day of that month.
pub fn parse_month(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", label.trim()), "%d %b %Y").ok()
}

/// National emissions keyed by numeric country id: `country_id,value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRow {
    pub country_id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub value: f64,
}

/// Country names keyed by numeric id (tab-separated): `id\tname`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_placeholders() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number(" 3.5 "), 3.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("NULL"), 0.0);
        assert_eq!(parse_number("n/a"), 0.0);
        assert_eq!(parse_number("---"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("Jan 2015"),
            NaiveDate::from_ymd_opt(2015, 1, 1)
        );
        assert_eq!(
            parse_month("Sep 2021"),
            NaiveDate::from_ymd_opt(2021, 9, 1)
        );
        assert_eq!(parse_month("2021-09"), None);
    }
}
