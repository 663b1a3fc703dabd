//! Main application component.

use std::rc::Rc;

use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use launchdash_rs::{Dataset, PayloadRange, SiteSelection, payload_scatter, success_pie};

use crate::charts::{self, PIE_CHART_ID, SCATTER_CHART_ID};
use crate::components::{PayloadSlider, SiteDropdown};

/// Source CSV for the launch dataset, fetched once at startup.
const DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Main application state.
#[derive(Clone, PartialEq)]
pub struct AppState {
    /// Loaded dataset; `None` until the startup fetch completes.
    pub dataset: Option<Rc<Dataset>>,
    /// Fatal dataset load error, if any.
    pub load_error: Option<String>,
    /// Current site selection.
    pub site: SiteSelection,
    /// Current payload range. Defaults to the observed dataset bounds
    /// once the dataset is loaded.
    pub payload: PayloadRange,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            load_error: None,
            site: SiteSelection::All,
            payload: PayloadRange::new(launchdash_rs::SLIDER_MIN, launchdash_rs::SLIDER_MAX),
        }
    }
}

/// Fetch and parse the launch dataset.
async fn fetch_dataset() -> Result<Dataset, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("fetching launch data failed: {e}"))?;
    if !response.ok() {
        return Err(format!(
            "fetching launch data failed: HTTP {}",
            response.status()
        ));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("reading launch data failed: {e}"))?;
    Dataset::from_csv_str(&text).map_err(|e| format!("parsing launch data failed: {e}"))
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);

    // Startup: fetch the dataset once, then seed the payload range with
    // the observed bounds. A failure here is fatal (error banner, no
    // retry).
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_dataset().await {
                    Ok(dataset) => {
                        let (min, max) = dataset.payload_bounds();
                        let mut new_state = (*state).clone();
                        new_state.dataset = Some(Rc::new(dataset));
                        new_state.payload = PayloadRange::new(min, max);
                        state.set(new_state);
                    }
                    Err(message) => {
                        gloo::console::error!(message.clone());
                        let mut new_state = (*state).clone();
                        new_state.load_error = Some(message);
                        state.set(new_state);
                    }
                }
            });
            || ()
        });
    }

    let on_site_change = {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut new_state = (*state).clone();
            new_state.site = SiteSelection::from_value(&value);
            state.set(new_state);
        })
    };

    let on_range_change = {
        let state = state.clone();
        Callback::from(move |range: PayloadRange| {
            let mut new_state = (*state).clone();
            new_state.payload = range;
            state.set(new_state);
        })
    };

    // Pie chart depends only on the site selection.
    {
        let dataset = state.dataset.clone();
        let site = state.site.clone();
        use_effect_with((dataset, site), move |(dataset, site)| {
            if let Some(dataset) = dataset {
                let spec = success_pie(dataset, site);
                spawn_local(async move {
                    charts::render(PIE_CHART_ID, &spec).await;
                });
            }
            || ()
        });
    }

    // Scatter chart depends on the site selection and the payload range.
    {
        let dataset = state.dataset.clone();
        let site = state.site.clone();
        let payload = state.payload;
        use_effect_with((dataset, site, payload), move |(dataset, site, payload)| {
            if let Some(dataset) = dataset {
                let spec = payload_scatter(dataset, site, *payload);
                spawn_local(async move {
                    charts::render(SCATTER_CHART_ID, &spec).await;
                });
            }
            || ()
        });
    }

    let sites: Vec<String> = state
        .dataset
        .as_ref()
        .map(|d| d.sites().to_vec())
        .unwrap_or_default();

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "SpaceX Launch Records Dashboard" }</h1>
            </header>

            <main class="main">
                if let Some(error) = &state.load_error {
                    <div class="error">
                        { format!("Failed to load launch data: {error}") }
                    </div>
                } else if state.dataset.is_none() {
                    <div class="loading">{ "Loading launch data..." }</div>
                } else {
                    <SiteDropdown
                        sites={sites}
                        value={state.site.value().to_string()}
                        on_change={on_site_change}
                    />

                    <div id={PIE_CHART_ID} class="chart"></div>

                    <PayloadSlider
                        range={state.payload}
                        on_change={on_range_change}
                    />

                    <div id={SCATTER_CHART_ID} class="chart"></div>
                }
            </main>
        </div>
    }
}
