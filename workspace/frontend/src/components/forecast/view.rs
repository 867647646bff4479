use common::forecast::NO_FORECAST_DATA;
use common::{ForecastView, Panel};
use yew::prelude::*;
use crate::components::common::fetch_render::FetchRender;
use super::table::ForecastTableView;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    pub panel: Panel<ForecastView>,
}

#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    let render = Callback::from(|view: ForecastView| match view {
        ForecastView::Empty => html! {
            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                <span>{NO_FORECAST_DATA}</span>
            </div>
        },
        ForecastView::Table(table) => html! { <ForecastTableView table={table} /> },
    });

    html! {
        <section id="forecast-data" class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Forecast"}</h3>
                <FetchRender<ForecastView>
                    state={props.panel.state().clone()}
                    render={render}
                    loading_text={Some("Fetching forecast...".to_string())}
                />
            </div>
        </section>
    }
}
