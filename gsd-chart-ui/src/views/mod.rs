//! The dashboard's charts as [`ViewSubscriber`]s.
//!
//! Every view is built from the loaded [`Datasets`], recomputes its payload
//! from scratch on each notification and hands it to a D3 renderer as JSON.

mod charts;
mod detail;
mod maps;

pub use charts::{BarView, HeatmapView, StackedAreaView};
pub use detail::{DotMatrixView, RaindropView, ScoreView};
pub use maps::{GlobeView, StateMapView};

use crate::js_bridge;
use gsd_core::{Datasets, ViewPhase, ViewSubscriber};
use gsd_data::ScoreRecord;
use serde::Serialize;
use std::rc::Rc;

pub const MAP_CONTAINER_ID: &str = "state-map";
pub const GLOBE_CONTAINER_ID: &str = "globe";
pub const BAR_CONTAINER_ID: &str = "bar-chart";
pub const HEATMAP_CONTAINER_ID: &str = "region-heatmap";
pub const AREA_CONTAINER_ID: &str = "solar-area";
pub const RAINDROP_CONTAINER_ID: &str = "water-use";
pub const DOT_MATRIX_CONTAINER_ID: &str = "irrigation-dots";

/// `(container_id, data_json, config_json)`, the shape of every `js_bridge::render_*`.
pub type RenderFn = fn(&str, &str, &str);

/// The DOM container a view draws into, and how far it has come.
#[derive(Debug, Clone)]
pub struct Canvas {
    container_id: String,
    render: RenderFn,
    phase: ViewPhase,
}

impl Canvas {
    pub fn new(container_id: &str, render: RenderFn) -> Self {
        Self {
            container_id: container_id.to_string(),
            render,
            phase: ViewPhase::Uninitialized,
        }
    }

    /// Mark the data as loaded.
    pub fn initialize(&mut self) {
        if self.phase == ViewPhase::Uninitialized {
            self.phase = ViewPhase::Initialized;
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn draw<T: Serialize>(&mut self, data: &T, config: &serde_json::Value) {
        let data_json = to_json(data);
        (self.render)(&self.container_id, &data_json, &config.to_string());
        self.phase = ViewPhase::Rendered;
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[GSD Debug] views: failed to serialize payload: {}", e);
            "null".to_string()
        }
    }
}

/// All eight dashboard views in subscription order. `on_scores` receives
/// the score panel's records on every selection change.
pub fn dashboard_views(
    data: Rc<Datasets>,
    on_scores: impl FnMut(Vec<ScoreRecord>) + 'static,
) -> Vec<Box<dyn ViewSubscriber>> {
    vec![
        Box::new(StateMapView::new(
            data.clone(),
            Canvas::new(MAP_CONTAINER_ID, js_bridge::render_state_map),
        )),
        Box::new(GlobeView::new(
            &data,
            Canvas::new(GLOBE_CONTAINER_ID, js_bridge::render_globe),
        )),
        Box::new(BarView::new(
            data.clone(),
            Canvas::new(BAR_CONTAINER_ID, js_bridge::render_bar_chart),
        )),
        Box::new(HeatmapView::new(
            data.clone(),
            Canvas::new(HEATMAP_CONTAINER_ID, js_bridge::render_heatmap),
        )),
        Box::new(StackedAreaView::new(
            data.clone(),
            Canvas::new(AREA_CONTAINER_ID, js_bridge::render_stacked_area),
        )),
        Box::new(RaindropView::new(
            &data,
            Canvas::new(RAINDROP_CONTAINER_ID, js_bridge::render_raindrops),
        )),
        Box::new(DotMatrixView::new(
            &data,
            Canvas::new(DOT_MATRIX_CONTAINER_ID, js_bridge::render_dot_matrix),
        )),
        Box::new(ScoreView::new(data, on_scores)),
    ]
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use gsd_core::RawDatasets;
    use std::cell::RefCell;

    thread_local! {
        pub static DRAWN: RefCell<Vec<(String, String, String)>> = RefCell::new(Vec::new());
    }

    /// Records every draw instead of calling into JS.
    pub fn record(container_id: &str, data_json: &str, config_json: &str) {
        DRAWN.with(|d| {
            d.borrow_mut().push((
                container_id.to_string(),
                data_json.to_string(),
                config_json.to_string(),
            ))
        });
    }

    /// Last `(data, config)` drawn into `container_id`, parsed.
    pub fn last_drawn(container_id: &str) -> Option<(serde_json::Value, serde_json::Value)> {
        DRAWN.with(|d| {
            d.borrow()
                .iter()
                .rev()
                .find(|(id, _, _)| id == container_id)
                .map(|(_, data, config)| {
                    (
                        serde_json::from_str(data).unwrap(),
                        serde_json::from_str(config).unwrap(),
                    )
                })
        })
    }

    pub fn draw_count(container_id: &str) -> usize {
        DRAWN.with(|d| d.borrow().iter().filter(|(id, _, _)| id == container_id).count())
    }

    pub fn canvas(container_id: &str) -> Canvas {
        Canvas::new(container_id, record)
    }

    pub fn datasets() -> Rc<Datasets> {
        let raw = RawDatasets {
            ev_csv: "State,RegistrationCount\nCA,1000\nTX,250\nAL,40\n".into(),
            solar_csv: "State,solar\nCA,400\nTX,200\nAL,500\n".into(),
            water_csv: "State,TotalGroundwaterWithdrawals,AQ-Wtotl,IR-CUsFr,IR-IrMic,IR-IrSpr,IR-IrSur\n\
                        CA,60,1,10,2,3,5\n\
                        TX,50,0,4,1,1,1\n\
                        CA,40,2,5,0,0,0\n\
                        AL,10,0,0,0,0,0\n"
                .into(),
            region_solar_csv: "Region,Year,Generation\nWest,2019,100\nSouth,2019,50\nWest,2020,120\n".into(),
            solar_area_csv: "State,Date,Count\nCA,Jan 2020,6\nTX,Jan 2020,4\nCA,Feb 2020,10\n".into(),
            emissions_csv: "country_id,value\n840,5000\n".into(),
            country_names_tsv: "id\tname\n840\tUnited States\n124\tCanada\n".into(),
        };
        Rc::new(Datasets::parse(&raw).unwrap())
    }
}
