use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;

use components::forecast::{ForecastForm, ForecastPanel};
use components::layout::layout::Layout;
use components::metrics::MetricsPanel;
use hooks::use_dashboard;

#[function_component(App)]
pub fn app() -> Html {
    let dashboard = use_dashboard();
    let surfaces = &dashboard.surfaces;

    html! {
        <Layout title="Weather Forecast">
            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                <div class="xl:col-span-2 flex flex-col gap-6">
                    <ForecastForm form={surfaces.form.clone()} dispatch={dashboard.dispatch.clone()} />
                    <ForecastPanel panel={surfaces.forecast.clone()} />
                </div>
                <MetricsPanel panel={surfaces.metrics.clone()} dispatch={dashboard.dispatch.clone()} />
            </div>
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Weather Forecast Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
