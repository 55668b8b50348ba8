//! Choropleth state map and emissions globe.

use super::Canvas;
use crate::js_bridge::STATE_CLICK_HANDLER;
use gsd_core::{Datasets, Metric, SelectionSet, ViewPhase, ViewSubscriber};
use gsd_data::emissions::{MISSING_EMISSION, UNKNOWN_COUNTRY};
use gsd_data::{aggregate_all, extent, EmissionTable, StateSummary};
use serde_json::json;
use std::rc::Rc;

/// Every state colored by the active metric, selected states outlined.
///
/// The map is the only view that produces selection changes: its click
/// handler calls `window.gsdToggleState`. Redrawing never toggles.
pub struct StateMapView {
    summaries: Vec<StateSummary>,
    selected: Vec<String>,
    metric: Metric,
    canvas: Canvas,
}

impl StateMapView {
    pub fn new(data: Rc<Datasets>, mut canvas: Canvas) -> Self {
        let summaries = aggregate_all(&data.ev, &data.solar, &data.water);
        canvas.initialize();
        Self {
            summaries,
            selected: Vec::new(),
            metric: Metric::default(),
            canvas,
        }
    }

    pub fn config(&self) -> serde_json::Value {
        let (lo, hi) = extent(&self.summaries, self.metric).unwrap_or((0.0, 0.0));
        json!({
            "metric": self.metric.key(),
            "label": self.metric.axis_label(),
            "domain": [lo, hi],
            "selected": self.selected,
            "onClick": STATE_CLICK_HANDLER,
        })
    }

    fn redraw(&mut self) {
        let config = self.config();
        self.canvas.draw(&self.summaries, &config);
    }
}

impl ViewSubscriber for StateMapView {
    fn name(&self) -> &str {
        "map"
    }

    fn on_selection_changed(&mut self, selection: &SelectionSet) {
        self.selected = selection.states().to_vec();
        self.redraw();
    }

    fn on_metric_changed(&mut self, metric: Metric) {
        self.metric = metric;
        self.redraw();
    }

    fn phase(&self) -> ViewPhase {
        self.canvas.phase()
    }
}

/// Country emissions on a globe. Independent of selection and metric, so
/// it draws once.
pub struct GlobeView {
    table: EmissionTable,
    canvas: Canvas,
}

impl GlobeView {
    pub fn new(data: &Datasets, mut canvas: Canvas) -> Self {
        let table = EmissionTable::new(&data.emissions, &data.country_names);
        canvas.initialize();
        Self { table, canvas }
    }

    fn draw_once(&mut self) {
        if self.canvas.phase() == ViewPhase::Rendered {
            return;
        }
        let (lo, hi) = self.table.extent().unwrap_or((0.0, 0.0));
        let config = json!({
            "domain": [lo, hi],
            "missingValue": MISSING_EMISSION,
            "unknownName": UNKNOWN_COUNTRY,
            "unit": "Gt",
        });
        self.canvas.draw(&self.table.countries(), &config);
    }
}

impl ViewSubscriber for GlobeView {
    fn name(&self) -> &str {
        "globe"
    }

    fn on_selection_changed(&mut self, _selection: &SelectionSet) {
        self.draw_once();
    }

    fn on_metric_changed(&mut self, _metric: Metric) {
        self.draw_once();
    }

    fn phase(&self) -> ViewPhase {
        self.canvas.phase()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_map_draws_every_state_with_selection() {
        let mut map = StateMapView::new(datasets(), canvas("map-test"));
        assert_eq!(map.phase(), ViewPhase::Initialized);

        map.on_metric_changed(Metric::SolarCount);
        map.on_selection_changed(&SelectionSet::from_names(["Texas"]));
        let (data, config) = last_drawn("map-test").unwrap();
        assert_eq!(data.as_array().unwrap().len(), 3);
        assert_eq!(config["metric"], "solarCount");
        assert_eq!(config["selected"], json!(["Texas"]));
        // Alabama's solar is zeroed, so the domain spans 0..400
        assert_eq!(config["domain"], json!([0.0, 400.0]));
        assert_eq!(config["onClick"], "gsdToggleState");
    }

    #[test]
    fn test_map_redraw_is_idempotent() {
        let mut map = StateMapView::new(datasets(), canvas("map-idem"));
        let selection = SelectionSet::from_names(["California"]);
        map.on_selection_changed(&selection);
        let first = last_drawn("map-idem");
        map.on_selection_changed(&selection);
        assert_eq!(last_drawn("map-idem"), first);
    }

    #[test]
    fn test_globe_draws_once() {
        let mut globe = GlobeView::new(&datasets(), canvas("globe-test"));
        globe.on_metric_changed(Metric::EvCount);
        globe.on_selection_changed(&SelectionSet::from_names(["Ohio"]));
        globe.on_metric_changed(Metric::WaterUsage);
        assert_eq!(draw_count("globe-test"), 1);
        let (data, config) = last_drawn("globe-test").unwrap();
        assert_eq!(data[0]["name"], "Canada");
        assert_eq!(data[0]["label"], "<1000");
        assert_eq!(config["domain"], json!([5000.0, 5000.0]));
    }
}
