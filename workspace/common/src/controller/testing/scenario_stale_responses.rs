//! Overlapping metrics requests under both stale-response policies.

use serde_json::json;

use super::*;
use crate::metrics::MetricsView;

fn title(controller: &Controller) -> Option<String> {
    controller
        .surfaces()
        .metrics
        .content()
        .and_then(MetricsView::card)
        .map(|card| card.title.clone())
}

/// Issues two metrics requests, mumbai first then delhi.
fn two_requests(controller: &mut Controller) -> (FetchRequest, FetchRequest) {
    let first = single_fetch(controller.handle(UiEvent::CityChanged("mumbai".to_string())));
    let second = single_fetch(controller.handle(UiEvent::CityChanged("delhi".to_string())));
    assert!(first.id < second.id);
    (first, second)
}

#[test]
fn test_last_resolved_wins_renders_late_stale_response() {
    let mut controller = controller_with(FormState::default(), StaleResponsePolicy::LastResolvedWins);
    let (first, second) = two_requests(&mut controller);

    resolve_ok(&mut controller, second, json!({"overall": {"mae": 1.0}}));
    resolve_ok(&mut controller, first, json!({"overall": {"mae": 2.0}}));

    assert_eq!(title(&controller).as_deref(), Some("LightGBM Model Performance for Mumbai"));
}

#[test]
fn test_last_issued_wins_drops_late_stale_response() {
    let mut controller = controller_with(FormState::default(), StaleResponsePolicy::LastIssuedWins);
    let (first, second) = two_requests(&mut controller);

    resolve_ok(&mut controller, second, json!({"overall": {"mae": 1.0}}));
    resolve_ok(&mut controller, first, json!({"overall": {"mae": 2.0}}));

    assert_eq!(title(&controller).as_deref(), Some("LightGBM Model Performance for Delhi"));
}

#[test]
fn test_last_issued_wins_keeps_loading_until_latest_arrives() {
    let mut controller = controller_with(FormState::default(), StaleResponsePolicy::LastIssuedWins);
    let (first, second) = two_requests(&mut controller);

    resolve_err(&mut controller, first, UiError::transport("timeout"));
    assert!(controller.surfaces().metrics.is_loading());

    resolve_ok(&mut controller, second, json!({}));
    assert_eq!(controller.surfaces().metrics.content(), Some(&MetricsView::Empty));
}

#[test]
fn test_policies_track_panels_independently() {
    let mut controller = controller_with(FormState::default(), StaleResponsePolicy::LastIssuedWins);
    let forecast = single_fetch(controller.handle(UiEvent::Submitted));
    let metrics = single_fetch(controller.handle(UiEvent::Loaded));

    resolve_ok(&mut controller, forecast, json!([{"date": "2024-06-01"}]));
    resolve_ok(&mut controller, metrics, json!({"overall": {"mae": 1.0}}));

    assert!(controller.surfaces().forecast.content().is_some());
    assert!(controller.surfaces().metrics.content().is_some());
}

#[test]
fn test_policy_parses_from_setting_value() {
    assert_eq!("last-issued".parse(), Ok(StaleResponsePolicy::LastIssuedWins));
    assert_eq!("last-resolved".parse(), Ok(StaleResponsePolicy::LastResolvedWins));
    assert!("newest".parse::<StaleResponsePolicy>().is_err());
    assert_eq!(StaleResponsePolicy::LastIssuedWins.as_str(), "last-issued");
}
