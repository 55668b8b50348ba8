//! Bar chart, region heatmap and stacked solar area chart.

use super::Canvas;
use gsd_core::{Datasets, Metric, SelectionSet, ViewPhase, ViewSubscriber};
use gsd_data::region::{region_year_axes, selected_regions};
use gsd_data::{aggregate, aggregate_region, solar_area_series, sort_by_metric};
use serde_json::json;
use std::rc::Rc;

/// Selected states as bars, tallest first.
pub struct BarView {
    data: Rc<Datasets>,
    selection: SelectionSet,
    metric: Metric,
    canvas: Canvas,
}

impl BarView {
    pub fn new(data: Rc<Datasets>, mut canvas: Canvas) -> Self {
        canvas.initialize();
        Self {
            data,
            selection: SelectionSet::new(),
            metric: Metric::default(),
            canvas,
        }
    }

    fn redraw(&mut self) {
        let mut summaries = aggregate(&self.selection, &self.data.ev, &self.data.solar, &self.data.water);
        sort_by_metric(&mut summaries, self.metric);
        let max = summaries
            .iter()
            .map(|s| s.value(self.metric))
            .fold(0.0, f64::max);
        let config = json!({
            "metric": self.metric.key(),
            "label": self.metric.axis_label(),
            "max": max,
            "showAxes": !self.selection.is_empty(),
        });
        self.canvas.draw(&summaries, &config);
    }
}

impl ViewSubscriber for BarView {
    fn name(&self) -> &str {
        "bar"
    }

    fn on_selection_changed(&mut self, selection: &SelectionSet) {
        self.selection = selection.clone();
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

/// Solar generation per region and year for the regions the selection
/// touches. Only shown while the solar metric is active.
pub struct HeatmapView {
    data: Rc<Datasets>,
    regions: Vec<String>,
    years: Vec<i32>,
    selection: SelectionSet,
    metric: Metric,
    canvas: Canvas,
}

impl HeatmapView {
    pub fn new(data: Rc<Datasets>, mut canvas: Canvas) -> Self {
        let (regions, years) = region_year_axes(&data.region_solar);
        canvas.initialize();
        Self {
            data,
            regions,
            years,
            selection: SelectionSet::new(),
            metric: Metric::default(),
            canvas,
        }
    }

    fn redraw(&mut self) {
        let cells = aggregate_region(&self.selection, &self.data.region_solar);
        let selected: Vec<&str> = selected_regions(&self.selection)
            .iter()
            .map(|r| r.as_str())
            .collect();
        let config = json!({
            "visible": self.metric == Metric::SolarCount && !self.selection.is_empty(),
            "regions": self.regions,
            "years": self.years,
            "selectedRegions": selected,
        });
        self.canvas.draw(&cells, &config);
    }
}

impl ViewSubscriber for HeatmapView {
    fn name(&self) -> &str {
        "heatmap"
    }

    fn on_selection_changed(&mut self, selection: &SelectionSet) {
        self.selection = selection.clone();
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

/// Monthly solar generation stacked by selected state.
pub struct StackedAreaView {
    data: Rc<Datasets>,
    selection: SelectionSet,
    metric: Metric,
    canvas: Canvas,
}

impl StackedAreaView {
    pub fn new(data: Rc<Datasets>, mut canvas: Canvas) -> Self {
        canvas.initialize();
        Self {
            data,
            selection: SelectionSet::new(),
            metric: Metric::default(),
            canvas,
        }
    }

    fn redraw(&mut self) {
        let series = solar_area_series(&self.selection, &self.data.solar_area);
        let config = json!({
            "visible": self.metric == Metric::SolarCount && !series.is_empty(),
            "maxY": series.max_y(),
            "dateFormat": "%Y-%m-%d",
        });
        self.canvas.draw(&series, &config);
    }
}

impl ViewSubscriber for StackedAreaView {
    fn name(&self) -> &str {
        "area"
    }

    fn on_selection_changed(&mut self, selection: &SelectionSet) {
        self.selection = selection.clone();
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
