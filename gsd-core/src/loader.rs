//! CSV parsing for the dashboard datasets.
//!
//! Every loader takes the full file contents as a string slice, so the same
//! code serves the CLI (files read from disk) and the WASM dashboard
//! (bodies fetched over HTTP).
//!
//! # CSV Formats
//!
//! - **EV registrations** (has headers): `State,RegistrationCount`
//! - **Solar** (has headers): `State,solar`
//! - **Water** (has headers): `State,TotalGroundwaterWithdrawals,...` plus
//!   water-use and irrigation columns, see [`WaterRow`]
//! - **Regional solar** (has headers): `Region,Year,Generation`
//! - **Monthly solar** (has headers): `State,Date,Count`
//! - **Emissions** (has headers): `country_id,value`
//! - **Country names** (tab-separated, has headers): `id\tname`

use crate::rows::{
    parse_month, CountryName, EmissionRow, EvRow, RawSolarAreaRow, RegionSolarRow, SolarAreaRow,
    SolarRow, WaterRow,
};
use serde::de::DeserializeOwned;

fn parse_rows<T: DeserializeOwned>(csv_data: &str, delimiter: u8) -> anyhow::Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Load EV registration counts.
///
/// # Example CSV
/// ```text
/// State,RegistrationCount
/// CA,1256600
/// ```
pub fn load_ev_rows(csv_data: &str) -> anyhow::Result<Vec<EvRow>> {
    let rows: Vec<EvRow> = parse_rows(csv_data, b',')?;
    log::info!("[GSD Debug] loader: Loaded {} EV rows", rows.len());
    Ok(rows)
}

/// Load solar generation per state.
pub fn load_solar_rows(csv_data: &str) -> anyhow::Result<Vec<SolarRow>> {
    let rows: Vec<SolarRow> = parse_rows(csv_data, b',')?;
    log::info!("[GSD Debug] loader: Loaded {} solar rows", rows.len());
    Ok(rows)
}

/// Load county-level groundwater withdrawals.
pub fn load_water_rows(csv_data: &str) -> anyhow::Result<Vec<WaterRow>> {
    let rows: Vec<WaterRow> = parse_rows(csv_data, b',')?;
    log::info!("[GSD Debug] loader: Loaded {} water rows", rows.len());
    Ok(rows)
}

/// Load solar generation by region and year.
pub fn load_region_solar_rows(csv_data: &str) -> anyhow::Result<Vec<RegionSolarRow>> {
    let rows: Vec<RegionSolarRow> = parse_rows(csv_data, b',')?;
    log::info!("[GSD Debug] loader: Loaded {} regional solar rows", rows.len());
    Ok(rows)
}

/// Load monthly solar generation per state.
///
/// Rows whose `Date` is not a `Mon YYYY` label are skipped.
///
/// # Example CSV
/// ```text
/// State,Date,Count
/// CA,Jan 2015,512
/// ```
pub fn load_solar_area_rows(csv_data: &str) -> anyhow::Result<Vec<SolarAreaRow>> {
    let raw: Vec<RawSolarAreaRow> = parse_rows(csv_data, b',')?;
    let mut rows = Vec::with_capacity(raw.len());
    let mut skipped = 0u32;
    for r in raw {
        match parse_month(&r.date) {
            Some(date) => rows.push(SolarAreaRow {
                state: r.state,
                date,
                count: r.count,
            }),
            None => skipped += 1,
        }
    }
    log::info!(
        "[GSD Debug] loader: Loaded {} monthly solar rows, skipped {} undated",
        rows.len(),
        skipped
    );
    Ok(rows)
}

/// Load national emissions keyed by country id.
pub fn load_emission_rows(csv_data: &str) -> anyhow::Result<Vec<EmissionRow>> {
    let rows: Vec<EmissionRow> = parse_rows(csv_data, b',')?;
    log::info!("[GSD Debug] loader: Loaded {} emission rows", rows.len());
    Ok(rows)
}

/// Load the tab-separated country name table.
pub fn load_country_names(tsv_data: &str) -> anyhow::Result<Vec<CountryName>> {
    let rows: Vec<CountryName> = parse_rows(tsv_data, b'\t')?;
    log::info!("[GSD Debug] loader: Loaded {} country names", rows.len());
    Ok(rows)
}

/// Every row source the dashboard needs, loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub ev: Vec<EvRow>,
    pub solar: Vec<SolarRow>,
    pub water: Vec<WaterRow>,
    pub region_solar: Vec<RegionSolarRow>,
    pub solar_area: Vec<SolarAreaRow>,
    pub emissions: Vec<EmissionRow>,
    pub country_names: Vec<CountryName>,
}

/// Raw file contents for every dataset, in the order they are fetched.
#[derive(Debug, Clone, Default)]
pub struct RawDatasets {
    pub ev_csv: String,
    pub solar_csv: String,
    pub water_csv: String,
    pub region_solar_csv: String,
    pub solar_area_csv: String,
    pub emissions_csv: String,
    pub country_names_tsv: String,
}

impl Datasets {
    /// Parse all sources. Fails as a whole if any single source fails.
    pub fn parse(raw: &RawDatasets) -> anyhow::Result<Self> {
        Ok(Self {
            ev: load_ev_rows(&raw.ev_csv)?,
            solar: load_solar_rows(&raw.solar_csv)?,
            water: load_water_rows(&raw.water_csv)?,
            region_solar: load_region_solar_rows(&raw.region_solar_csv)?,
            solar_area: load_solar_area_rows(&raw.solar_area_csv)?,
            emissions: load_emission_rows(&raw.emissions_csv)?,
            country_names: load_country_names(&raw.country_names_tsv)?,
        })
    }
}
