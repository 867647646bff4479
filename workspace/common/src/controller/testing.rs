//! Controller scenarios.
//!
//! Each scenario drives a [`Controller`] with the events a user and the
//! network would produce, then inspects the surfaces and returned effects.
//! No DOM and no network are involved.

mod scenario_form_rules;
mod scenario_forecast_submit;
mod scenario_metrics_panel;
mod scenario_stale_responses;

use serde_json::Value;

use super::{Controller, Effect, FetchRequest, FetchTarget, StaleResponsePolicy, UiEvent};
use crate::error::UiError;
use crate::form::FormState;

pub const BASE_URL: &str = "http://127.0.0.1:8000";

pub fn controller() -> Controller {
    controller_with(FormState::default(), StaleResponsePolicy::default())
}

pub fn controller_with(initial: FormState, policy: StaleResponsePolicy) -> Controller {
    Controller::new(BASE_URL, initial, policy)
}

/// The fetches among `effects`.
pub fn fetches(effects: Vec<Effect>) -> Vec<FetchRequest> {
    effects
        .into_iter()
        .map(|effect| match effect {
            Effect::Fetch(request) => request,
        })
        .collect()
}

/// Expects exactly one fetch and returns it.
pub fn single_fetch(effects: Vec<Effect>) -> FetchRequest {
    let mut requests = fetches(effects);
    assert_eq!(requests.len(), 1, "expected exactly one fetch: {:?}", requests);
    requests.remove(0)
}

pub fn is_metrics(request: &FetchRequest) -> bool {
    matches!(request.target, FetchTarget::Metrics { .. })
}

pub fn resolve_ok(controller: &mut Controller, request: FetchRequest, payload: Value) -> Vec<Effect> {
    controller.handle(UiEvent::Resolved {
        request,
        result: Ok(payload),
    })
}

pub fn resolve_err(controller: &mut Controller, request: FetchRequest, err: UiError) -> Vec<Effect> {
    controller.handle(UiEvent::Resolved {
        request,
        result: Err(err),
    })
}
