//! Single-state and national detail views: water-use raindrops, irrigation
//! dot matrix and the score panel.

use super::Canvas;
use gsd_core::{Datasets, Metric, SelectionSet, ViewPhase, ViewSubscriber};
use gsd_data::dot_matrix::IrrigationMethod;
use gsd_data::{aggregate_score, irrigation_totals, water_use_breakdown, water_use_by_state};
use gsd_data::{IrrigationTotals, ScoreRecord, WaterUseTotals};
use serde_json::json;
use std::rc::Rc;

/// Water use by category for the active state: the dropdown focus, or the
/// most recently selected state.
pub struct RaindropView {
    totals: Vec<WaterUseTotals>,
    active: Option<String>,
    canvas: Canvas,
}

impl RaindropView {
    pub fn new(data: &Datasets, mut canvas: Canvas) -> Self {
        let totals = water_use_by_state(&data.water);
        canvas.initialize();
        Self {
            totals,
            active: None,
            canvas,
        }
    }

    fn redraw(&mut self) {
        let slices = self
            .active
            .as_deref()
            .and_then(|state| water_use_breakdown(&self.totals, state))
            .unwrap_or_default();
        let max = slices.iter().map(|s| s.value).fold(0.0, f64::max);
        let config = json!({
            "state": self.active,
            "max": max,
            "unit": "Mgal/d",
        });
        self.canvas.draw(&slices, &config);
    }
}

impl ViewSubscriber for RaindropView {
    fn name(&self) -> &str {
        "raindrop"
    }

    fn on_selection_changed(&mut self, selection: &SelectionSet) {
        self.active = selection.active().map(str::to_string);
        self.redraw();
    }

    fn on_metric_changed(&mut self, _metric: Metric) {
        if self.canvas.phase() != ViewPhase::Rendered {
            self.redraw();
        }
    }

    fn phase(&self) -> ViewPhase {
        self.canvas.phase()
    }
}

/// National irrigation methods per land use, 32 dots each.
pub struct DotMatrixView {
    totals: Vec<IrrigationTotals>,
    canvas: Canvas,
}

impl DotMatrixView {
    pub fn new(data: &Datasets, mut canvas: Canvas) -> Self {
        let totals = irrigation_totals(&data.water);
        canvas.initialize();
        Self { totals, canvas }
    }

    pub fn payload(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .totals
            .iter()
            .map(|t| {
                let dots = t.allocate();
                let methods: Vec<serde_json::Value> = IrrigationMethod::ALL
                    .iter()
                    .map(|&m| {
                        json!({
                            "method": m.label(),
                            "dots": dots.get(m),
                            "percentage": dots.percentage(m),
                        })
                    })
                    .collect();
                json!({
                    "landUse": t.land_use.code(),
                    "description": t.land_use.description(),
                    "total": t.total,
                    "methods": methods,
                })
            })
            .collect();
        json!(rows)
    }

    fn draw_once(&mut self) {
        if self.canvas.phase() == ViewPhase::Rendered {
            return;
        }
        let payload = self.payload();
        let config = json!({ "totalDots": gsd_data::TOTAL_DOTS });
        self.canvas.draw(&payload, &config);
    }
}

impl ViewSubscriber for DotMatrixView {
    fn name(&self) -> &str {
        "dot-matrix"
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

/// Composite scores for the selected states. Rendered by the `ScorePanel`
/// component, so records go to a sink rather than to JS.
pub struct ScoreView {
    data: Rc<Datasets>,
    on_scores: Box<dyn FnMut(Vec<ScoreRecord>)>,
    phase: ViewPhase,
}

impl ScoreView {
    pub fn new(data: Rc<Datasets>, on_scores: impl FnMut(Vec<ScoreRecord>) + 'static) -> Self {
        Self {
            data,
            on_scores: Box::new(on_scores),
            phase: ViewPhase::Initialized,
        }
    }
}

impl ViewSubscriber for ScoreView {
    fn name(&self) -> &str {
        "score"
    }

    fn on_selection_changed(&mut self, selection: &SelectionSet) {
        let scores = aggregate_score(selection, &self.data.ev, &self.data.solar, &self.data.water);
        (self.on_scores)(scores);
        self.phase = ViewPhase::Rendered;
    }

    fn on_metric_changed(&mut self, _metric: Metric) {}

    fn phase(&self) -> ViewPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_raindrops_follow_active_state() {
        let mut rain = RaindropView::new(&datasets(), canvas("rain-test"));
        rain.on_metric_changed(Metric::EvCount);
        let (data, config) = last_drawn("rain-test").unwrap();
        assert_eq!(data, json!([]));
        assert_eq!(config["state"], serde_json::Value::Null);

        let mut selection = SelectionSet::from_names(["California", "Texas"]);
        rain.on_selection_changed(&selection);
        let (data, _) = last_drawn("rain-test").unwrap();
        assert_eq!(data[2]["value"], 4.0);

        selection.set_focus("California");
        rain.on_selection_changed(&selection);
        let (data, config) = last_drawn("rain-test").unwrap();
        assert_eq!(data[0]["value"], 3.0);
        assert_eq!(config["state"], "California");
        assert_eq!(config["max"], 15.0);
    }

    #[test]
    fn test_dot_matrix_payload() {
        let dots = DotMatrixView::new(&datasets(), canvas("dots-test"));
        let payload = dots.payload();
        assert_eq!(payload.as_array().unwrap().len(), 3);
        assert_eq!(payload[0]["landUse"], "IR");
        let total: u64 = payload[0]["methods"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["dots"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 32);
    }

    #[test]
    fn test_score_view_sends_records() {
        let received: Rc<RefCell<Vec<ScoreRecord>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let mut score = ScoreView::new(datasets(), move |records| *sink.borrow_mut() = records);
        assert_eq!(score.phase(), ViewPhase::Initialized);

        score.on_selection_changed(&SelectionSet::from_names(["Texas"]));
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0].state_name, "Texas");
        assert_eq!(score.phase(), ViewPhase::Rendered);
    }
}
