//! Event-driven controller for the forecast form and its two result panels.
//!
//! The shell feeds every user interaction and every fetch resolution into
//! [`Controller::handle`]. The controller mutates its [`Surfaces`] and returns
//! the fetches to perform; it never touches the DOM or the network itself.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::catalog::{ForecastType, ProphetHorizon, UnknownChoice, Weekday};
use crate::error::UiError;
use crate::forecast::ForecastView;
use crate::form::{Form, FormState};
use crate::metrics::MetricsView;
use crate::panel::Panel;
use crate::payload::{self, MetricSet};
use crate::query::{self, METRICS_ENDPOINT, PREDICT_ENDPOINT};

#[cfg(test)]
mod testing;

/// What the controller does with a response that resolves after a newer
/// request for the same panel was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Every response is rendered; the last one to arrive wins.
    #[default]
    LastResolvedWins,
    /// Only the most recently issued request may render.
    LastIssuedWins,
}

impl StaleResponsePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastResolvedWins => "last-resolved",
            Self::LastIssuedWins => "last-issued",
        }
    }
}

impl FromStr for StaleResponsePolicy {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-resolved" => Ok(Self::LastResolvedWins),
            "last-issued" => Ok(Self::LastIssuedWins),
            other => Err(UnknownChoice {
                kind: "stale response policy",
                value: other.to_string(),
            }),
        }
    }
}

/// Monotonically increasing per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Forecast,
    /// Carries the selection the request was issued for, used for the card title.
    Metrics { city: String, model_name: String },
}

impl FetchTarget {
    fn subject(&self) -> &'static str {
        match self {
            Self::Forecast => "forecast",
            Self::Metrics { .. } => "metrics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub target: FetchTarget,
    pub url: String,
}

/// Side effects the shell must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// GET `url`, then feed the outcome back as [`UiEvent::Resolved`].
    Fetch(FetchRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Loaded,
    CityChanged(String),
    ModelChanged(String),
    ForecastTypeChanged(ForecastType),
    DayOfWeekChanged(Option<Weekday>),
    ProphetExtendedChanged(Option<ProphetHorizon>),
    IncludeBoundsToggled(bool),
    Submitted,
    MetricsTabSelected(String),
    Resolved {
        request: FetchRequest,
        result: Result<Value, UiError>,
    },
}

impl UiEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::CityChanged(_) => "city_changed",
            Self::ModelChanged(_) => "model_changed",
            Self::ForecastTypeChanged(_) => "forecast_type_changed",
            Self::DayOfWeekChanged(_) => "day_of_week_changed",
            Self::ProphetExtendedChanged(_) => "prophet_extended_changed",
            Self::IncludeBoundsToggled(_) => "include_bounds_toggled",
            Self::Submitted => "submitted",
            Self::MetricsTabSelected(_) => "metrics_tab_selected",
            Self::Resolved { .. } => "resolved",
        }
    }
}

/// Named UI surfaces the controller writes to and the shell renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Surfaces {
    pub form: Form,
    pub forecast: Panel<ForecastView>,
    pub metrics: Panel<MetricsView>,
}

pub struct Controller {
    base_url: String,
    policy: StaleResponsePolicy,
    surfaces: Surfaces,
    next_request: u64,
    latest_forecast: Option<RequestId>,
    latest_metrics: Option<RequestId>,
}

impl Controller {
    pub fn new(base_url: impl Into<String>, initial: FormState, policy: StaleResponsePolicy) -> Self {
        Self {
            base_url: base_url.into(),
            policy,
            surfaces: Surfaces {
                form: Form::new(initial),
                ..Surfaces::default()
            },
            next_request: 0,
            latest_forecast: None,
            latest_metrics: None,
        }
    }

    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    pub fn form_state(&self) -> &FormState {
        self.surfaces.form.state()
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        debug!(event = event.name(), "handling ui event");

        match event {
            UiEvent::Loaded => {
                self.surfaces.form.apply_load_rules();
                self.refresh_metrics()
            }
            UiEvent::CityChanged(city) => {
                self.surfaces.form.set_city(city);
                self.refresh_metrics()
            }
            UiEvent::ModelChanged(model_name) => {
                self.surfaces.form.set_model(model_name);
                self.refresh_metrics()
            }
            UiEvent::ForecastTypeChanged(forecast_type) => {
                self.surfaces.form.set_forecast_type(forecast_type);
                Vec::new()
            }
            UiEvent::DayOfWeekChanged(day) => {
                self.surfaces.form.set_day_of_week(day);
                Vec::new()
            }
            UiEvent::ProphetExtendedChanged(horizon) => {
                self.surfaces.form.set_prophet_extended(horizon);
                Vec::new()
            }
            UiEvent::IncludeBoundsToggled(checked) => {
                self.surfaces.form.set_include_bounds(checked);
                Vec::new()
            }
            UiEvent::Submitted => self.submit(),
            UiEvent::MetricsTabSelected(feature) => {
                match self.surfaces.metrics.content_mut().and_then(MetricsView::card_mut) {
                    Some(card) => {
                        card.select_tab(&feature);
                    }
                    None => warn!(feature = %feature, "tab selected without a metrics card"),
                }
                Vec::new()
            }
            UiEvent::Resolved { request, result } => {
                self.resolve(request, result);
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        let params = query::forecast_params(self.surfaces.form.state());
        let url = query::endpoint_url(&self.base_url, PREDICT_ENDPOINT, &params);

        self.surfaces.forecast.show_loading();
        vec![self.issue(FetchTarget::Forecast, url)]
    }

    /// Live side panel: refetches whenever both city and model are set.
    fn refresh_metrics(&mut self) -> Vec<Effect> {
        let state = self.surfaces.form.state();
        if !state.has_metrics_scope() {
            debug!("metrics refresh skipped, city or model empty");
            return Vec::new();
        }

        let target = FetchTarget::Metrics {
            city: state.city.clone(),
            model_name: state.model_name.clone(),
        };
        let params = query::metrics_params(state);
        let url = query::endpoint_url(&self.base_url, METRICS_ENDPOINT, &params);

        self.surfaces.metrics.show_loading();
        vec![self.issue(target, url)]
    }

    fn issue(&mut self, target: FetchTarget, url: String) -> Effect {
        self.next_request += 1;
        let id = RequestId(self.next_request);

        match target {
            FetchTarget::Forecast => self.latest_forecast = Some(id),
            FetchTarget::Metrics { .. } => self.latest_metrics = Some(id),
        }

        info!(request = %id, subject = target.subject(), url = %url, "issuing fetch");
        Effect::Fetch(FetchRequest { id, target, url })
    }

    fn is_stale(&self, request: &FetchRequest) -> bool {
        if self.policy == StaleResponsePolicy::LastResolvedWins {
            return false;
        }
        let latest = match request.target {
            FetchTarget::Forecast => self.latest_forecast,
            FetchTarget::Metrics { .. } => self.latest_metrics,
        };
        latest != Some(request.id)
    }

    fn resolve(&mut self, request: FetchRequest, result: Result<Value, UiError>) {
        if self.is_stale(&request) {
            debug!(request = %request.id, subject = request.target.subject(), "dropping superseded response");
            return;
        }

        match (request.target, result) {
            (target, Err(err)) => {
                let banner = err.banner(target.subject());
                warn!(request = %request.id, status = ?err.http_status, "{}", banner);
                match target {
                    FetchTarget::Forecast => self.surfaces.forecast.show_error(banner),
                    FetchTarget::Metrics { .. } => self.surfaces.metrics.show_error(banner),
                }
            }
            (FetchTarget::Forecast, Ok(payload)) => {
                let rows = payload::forecast_rows(&payload);
                debug!(request = %request.id, rows = rows.len(), "rendering forecast");
                self.surfaces.forecast.render(ForecastView::build(&rows));
            }
            (FetchTarget::Metrics { city, model_name }, Ok(payload)) => {
                let set = MetricSet::from_value(&payload);
                debug!(request = %request.id, scopes = set.len(), "rendering metrics");
                self.surfaces
                    .metrics
                    .render(MetricsView::build(&set, &city, &model_name));
            }
        }
    }
}
