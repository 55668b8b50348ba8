//! `dots` and `water-use`: the water detail views.

use crate::{read_file, to_json};
use gsd_core::loader::load_water_rows;
use gsd_data::dot_matrix::IrrigationMethod;
use gsd_data::{irrigation_totals, water_use_breakdown, water_use_by_state};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DotRow {
    land_use: &'static str,
    total: f64,
    micro: u32,
    sprinkler: u32,
    gravity: u32,
}

pub fn run_dots(path: &str, json: bool) -> anyhow::Result<String> {
    let water = load_water_rows(&read_file(path)?)?;
    let rows: Vec<DotRow> = irrigation_totals(&water)
        .iter()
        .map(|t| {
            let dots = t.allocate();
            DotRow {
                land_use: t.land_use.description(),
                total: t.total,
                micro: dots.micro,
                sprinkler: dots.sprinkler,
                gravity: dots.gravity,
            }
        })
        .collect();
    if json {
        return to_json(&rows);
    }

    let mut out = format!("{:<18} {:>12}", "Land use", "Total");
    for method in IrrigationMethod::ALL {
        let _ = write!(out, " {:>10}", method.label());
    }
    out.push('\n');
    for r in &rows {
        let _ = writeln!(
            out,
            "{:<18} {:>12.2} {:>10} {:>10} {:>10}",
            r.land_use, r.total, r.micro, r.sprinkler, r.gravity
        );
    }
    Ok(out.trim_end().to_string())
}

pub fn run_water_use(path: &str, state: &str, json: bool) -> anyhow::Result<String> {
    let water = load_water_rows(&read_file(path)?)?;
    let totals = water_use_by_state(&water);
    let slices = water_use_breakdown(&totals, state)
        .ok_or_else(|| anyhow::anyhow!("No water use data for {}", state))?;
    if json {
        return to_json(&slices);
    }
    let mut out = format!("{} (Mgal/d)\n", state);
    for s in &slices {
        let _ = writeln!(out, "{:<14} {:>12.2}", s.label, s.value);
    }
    Ok(out.trim_end().to_string())
}
