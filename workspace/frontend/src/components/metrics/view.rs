use common::metrics::NO_METRICS;
use common::{MetricsCard, MetricsView, Panel, UiEvent};
use yew::prelude::*;
use crate::components::common::error::ErrorBanner;
use crate::components::common::loading::{Loading, LoadingSize};
use super::table::MetricsTableView;

#[derive(Properties, PartialEq)]
pub struct MetricsPanelProps {
    pub panel: Panel<MetricsView>,
    pub dispatch: Callback<UiEvent>,
}

/// Live side panel with model quality metrics. Hidden until the first fetch.
#[function_component(MetricsPanel)]
pub fn metrics_panel(props: &MetricsPanelProps) -> Html {
    let panel = &props.panel;
    if !panel.is_visible() {
        return html! {};
    }

    html! {
        <aside id="model-metrics" class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Model Metrics"}</h3>
                if panel.is_loading() {
                    <div id="metrics-loading"><Loading size={LoadingSize::Small} /></div>
                }
                if let Some(message) = panel.error_banner() {
                    <div id="metrics-error"><ErrorBanner message={message.to_string()} /></div>
                }
                <div id="metrics-data">
                    {match panel.content() {
                        Some(MetricsView::Empty) => html! { <p>{NO_METRICS}</p> },
                        Some(MetricsView::Card(card)) => render_card(card, &props.dispatch),
                        None => html! {},
                    }}
                </div>
            </div>
        </aside>
    }
}

fn render_card(card: &MetricsCard, dispatch: &Callback<UiEvent>) -> Html {
    html! {
        <>
            <div class="metrics-card">
                <h3 class="font-semibold mb-2">{&card.title}</h3>
                if let Some(overall) = &card.overall {
                    <MetricsTableView table={overall.clone()} />
                }
            </div>
            if card.has_tabs() {
                <div role="tablist" class="tabs tabs-bordered metrics-tabs mt-4">
                    { for card.tabs.iter().map(|tab| {
                        let active = card.is_active(&tab.feature);
                        let onclick = {
                            let dispatch = dispatch.clone();
                            let feature = tab.feature.clone();
                            Callback::from(move |_: MouseEvent| {
                                dispatch.emit(UiEvent::MetricsTabSelected(feature.clone()))
                            })
                        };
                        html! {
                            <a
                                role="tab"
                                class={classes!("tab", "metrics-tab", active.then_some("tab-active"), active.then_some("active"))}
                                data-feature={tab.feature.clone()}
                                {onclick}
                            >
                                {&tab.feature}
                            </a>
                        }
                    })}
                </div>
                <div class="tab-contents">
                    { for card.tabs.iter().map(|tab| {
                        let active = card.is_active(&tab.feature);
                        html! {
                            <div
                                class={classes!("tab-content", active.then_some("active"), (!active).then_some("hidden"))}
                                data-feature={tab.feature.clone()}
                            >
                                <MetricsTableView table={tab.table.clone()} />
                            </div>
                        }
                    })}
                </div>
            }
        </>
    }
}
