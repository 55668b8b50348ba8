//! Green States Dashboard
//!
//! Linked charts of EV registrations, solar generation and water use for
//! U.S. states. Clicking a state on the map toggles it in the selection;
//! every other chart follows.
//!
//! Data flow:
//! 1. On mount: fetch every dataset concurrently. If any fetch or parse
//!    fails, nothing is initialized and the error is shown.
//! 2. Build the `SelectionStore` and subscribe the eight views to it.
//! 3. Install `window.gsdToggleState` for the map and forward its clicks
//!    through a channel to this task, which applies them to the store.
//! 4. Metric buttons and the state dropdown update the store from their
//!    own event handlers.

use anyhow::anyhow;
use futures::channel::mpsc;
use futures::StreamExt;
use gsd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricSelector, ScorePanel,
    StateDropdown,
};
use gsd_chart_ui::js_bridge;
use gsd_chart_ui::state::AppState;
use gsd_chart_ui::views::{self, dashboard_views};
use gsd_core::{Datasets, Metric, RawDatasets, SelectionStore};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// Served alongside the WASM bundle, fetched in this order.
const EV_URL: &str = "./data/ev-registration-counts-by-state.csv";
const SOLAR_URL: &str = "./data/solar_power.csv";
const WATER_GZ_URL: &str = "./data/water_conservation_data.csv.gz";
const REGION_SOLAR_URL: &str = "./data/solar-data-region.csv";
const SOLAR_AREA_URL: &str = "./data/solarData-area.csv";
const EMISSIONS_URL: &str = "./data/countries_emissions_ids.csv";
const COUNTRY_NAMES_URL: &str = "./data/world-110m-country-names.tsv";

const DATASET_URLS: [&str; 7] = [
    EV_URL,
    SOLAR_URL,
    WATER_GZ_URL,
    REGION_SOLAR_URL,
    SOLAR_AREA_URL,
    EMISSIONS_URL,
    COUNTRY_NAMES_URL,
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gsd-root"))
        .launch(App);
}

/// Fetch and parse every dataset. Fails as a whole if any one fails.
async fn load_datasets() -> anyhow::Result<Datasets> {
    let bodies = futures::future::try_join_all(DATASET_URLS.iter().map(|url| js_bridge::fetch_text(url))).await?;
    let [ev_csv, solar_csv, water_csv, region_solar_csv, solar_area_csv, emissions_csv, country_names_tsv]: [String; 7] =
        bodies
            .try_into()
            .map_err(|b: Vec<String>| anyhow!("expected {} datasets, got {}", DATASET_URLS.len(), b.len()))?;
    Datasets::parse(&RawDatasets {
        ev_csv,
        solar_csv,
        water_csv,
        region_solar_csv,
        solar_area_csv,
        emissions_csv,
        country_names_tsv,
    })
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            let data = match load_datasets().await {
                Ok(data) => Rc::new(data),
                Err(e) => {
                    log::error!("[GSD Debug] dashboard: failed to load datasets: {:#}", e);
                    state.error_msg.set(Some(format!("{:#}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            let mut scores = state.scores;
            let mut store = SelectionStore::new();
            for view in dashboard_views(data, move |records| scores.set(records)) {
                store.subscribe(view);
            }
            log::info!("[GSD Debug] dashboard: {} views subscribed", store.subscriber_count());

            let store = Rc::new(RefCell::new(store));
            state.sync(&store.borrow());
            state.store.set(Some(store));
            state.loading.set(false);

            let (tx, mut clicks) = mpsc::unbounded::<String>();
            let registered = js_bridge::register_state_click_handler(move |name| {
                if tx.unbounded_send(name).is_err() {
                    log::warn!("[GSD Debug] dashboard: map click after shutdown");
                }
            });
            if let Err(e) = registered {
                log::error!("[GSD Debug] dashboard: {:#}", e);
                state.error_msg.set(Some(format!("Map selection is unavailable: {:#}", e)));
                return;
            }

            // Map clicks are applied one at a time, each broadcast finishing
            // before the next click is read.
            while let Some(name) = clicks.next().await {
                state.with_store(|store| store.toggle(&name));
            }
        });
    });

    let metric = (state.metric)();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.store.read().is_some() {
                MetricSelector {}

                ChartHeader {
                    title: "Select states".to_string(),
                    caption: format!("Colored by {}. Click a state to add or remove it.", metric.axis_label()),
                }
                ChartContainer { id: views::MAP_CONTAINER_ID.to_string(), min_height: 500 }

                StateDropdown {}

                ChartHeader { title: "Selected states".to_string(), caption: metric.axis_label().to_string() }
                ChartContainer { id: views::BAR_CONTAINER_ID.to_string() }

                if metric == Metric::SolarCount {
                    ChartHeader {
                        title: "Solar generation by region".to_string(),
                        caption: "Thousand MWh per census region and year".to_string(),
                    }
                }
                ChartContainer {
                    id: views::HEATMAP_CONTAINER_ID.to_string(),
                    hidden: metric != Metric::SolarCount,
                    min_height: 300,
                }
                ChartContainer {
                    id: views::AREA_CONTAINER_ID.to_string(),
                    hidden: metric != Metric::SolarCount,
                    min_height: 300,
                }

                ChartHeader { title: "Water use".to_string(), caption: "Mgal/d by category".to_string() }
                ChartContainer { id: views::RAINDROP_CONTAINER_ID.to_string() }

                ChartHeader {
                    title: "Irrigation methods".to_string(),
                    caption: "Each land use drawn as 32 dots".to_string(),
                }
                ChartContainer { id: views::DOT_MATRIX_CONTAINER_ID.to_string(), min_height: 250 }

                ChartHeader { title: "Green scores".to_string() }
                ScorePanel {}

                ChartHeader { title: "Global emissions".to_string(), caption: "Gt per country".to_string() }
                ChartContainer { id: views::GLOBE_CONTAINER_ID.to_string(), min_height: 500 }
            }
        }
    }
}
