//! Builds the query strings for the two read-only endpoints.

use url::form_urlencoded;

use crate::form::FormState;

pub const PREDICT_ENDPOINT: &str = "/predict";
pub const METRICS_ENDPOINT: &str = "/model-metrics";

/// Ordered query parameters. Insertion order is kept so URLs are stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.0.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering, as `URLSearchParams` produces.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

/// Parameters for `GET /predict`.
///
/// `day_of_week` is gated on the forecast type rather than on the stored
/// value, so a stale selection never leaks into a 48h request.
pub fn forecast_params(form: &FormState) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("city", form.city.as_str());
    params.push("model_name", form.model_name.as_str());
    params.push("forecast_type", form.forecast_type.as_str());

    if form.forecast_type.carries_day_of_week() {
        if let Some(day) = form.day_of_week {
            params.push("day_of_week", day.index().to_string());
        }
    }

    if form.is_prophet() {
        if let Some(horizon) = form.prophet_extended {
            params.push("prophet_extended", horizon.as_str());
        }
        // Unchecked means absent, never "false".
        if form.include_bounds {
            params.push("include_bounds", "true");
        }
    }

    params
}

/// Parameters for `GET /model-metrics`; independent of every forecast-only field.
pub fn metrics_params(form: &FormState) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("city", form.city.as_str());
    params.push("model_name", form.model_name.as_str());
    params
}

/// Full URL for an endpoint under `base_url`.
pub fn endpoint_url(base_url: &str, endpoint: &str, params: &QueryParams) -> String {
    let base = base_url.trim_end_matches('/');
    if params.is_empty() {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}{}?{}", base, endpoint, params.to_query_string())
    }
}
