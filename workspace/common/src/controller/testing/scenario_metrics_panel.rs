//! The auto-refreshing metrics side panel.

use serde_json::json;

use super::*;
use crate::catalog::ForecastType;
use crate::metrics::{Interpretation, MetricsView, NO_METRICS};

fn three_scope_payload() -> Value {
    json!({
        "overall": {"mae": 2.5, "rmse": null, "mape": 12.345, "r2": 0.85},
        "temperature": {"mae": 1.1, "rmse": 1.4, "mape": 4.2, "r2": 0.93},
        "humidity": {"mae": 5.3, "rmse": 7.0, "mape": 55.0, "r2": 0.35},
    })
}

#[test]
fn test_load_fetches_metrics_for_initial_selection() {
    let mut controller = controller();

    let request = single_fetch(controller.handle(UiEvent::Loaded));

    assert_eq!(
        request.target,
        FetchTarget::Metrics {
            city: "ahmedabad".to_string(),
            model_name: "LightGBM".to_string(),
        }
    );
    assert_eq!(request.url, "http://127.0.0.1:8000/model-metrics?city=ahmedabad&model_name=LightGBM");
    assert!(controller.surfaces().metrics.is_loading());
}

#[test]
fn test_city_and_model_changes_refresh_metrics() {
    let mut controller = controller();

    let by_city = single_fetch(controller.handle(UiEvent::CityChanged("mumbai".to_string())));
    assert!(is_metrics(&by_city));
    assert!(by_city.url.ends_with("city=mumbai&model_name=LightGBM"));

    let by_model = single_fetch(controller.handle(UiEvent::ModelChanged("Prophet".to_string())));
    assert!(by_model.url.ends_with("city=mumbai&model_name=Prophet"));
}

#[test]
fn test_other_form_changes_do_not_refresh_metrics() {
    let mut controller = controller();

    assert!(controller.handle(UiEvent::ForecastTypeChanged(ForecastType::TwoWeeks)).is_empty());
    assert!(controller.handle(UiEvent::IncludeBoundsToggled(true)).is_empty());
    assert!(!controller.surfaces().metrics.is_visible());
}

#[test]
fn test_submit_does_not_refresh_metrics() {
    let mut controller = controller();

    let request = single_fetch(controller.handle(UiEvent::Submitted));

    assert!(!is_metrics(&request));
}

#[test]
fn test_empty_selection_skips_fetch() {
    let mut controller = controller();

    let effects = controller.handle(UiEvent::CityChanged(String::new()));

    assert!(effects.is_empty());
    assert!(!controller.surfaces().metrics.is_loading());
}

#[test]
fn test_metrics_render_overall_and_feature_tabs() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Loaded));

    resolve_ok(&mut controller, request, three_scope_payload());

    let metrics = &controller.surfaces().metrics;
    assert!(!metrics.is_loading());
    let card = metrics.content().and_then(MetricsView::card).unwrap();
    assert_eq!(card.title, "LightGBM Model Performance for Ahmedabad");

    let overall = card.overall.as_ref().unwrap();
    assert_eq!(overall.rows.len(), 3);
    assert_eq!(overall.rows[1].value, "12.35%");
    assert_eq!(overall.rows[1].interpretation, Some(Interpretation::Good));

    let features: Vec<&str> = card.tabs.iter().map(|t| t.feature.as_str()).collect();
    assert_eq!(features, vec!["temperature", "humidity"]);
    assert!(card.is_active("temperature"));
}

#[test]
fn test_tab_selection_switches_without_fetch() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Loaded));
    resolve_ok(&mut controller, request, three_scope_payload());

    let effects = controller.handle(UiEvent::MetricsTabSelected("humidity".to_string()));

    assert!(effects.is_empty());
    let card = controller.surfaces().metrics.content().and_then(MetricsView::card).unwrap();
    assert!(card.is_active("humidity"));
    assert!(!card.is_active("temperature"));
    assert_eq!(card.active_tab().unwrap().table.rows[2].interpretation, Some(Interpretation::Poor));
}

#[test]
fn test_empty_metrics_object_shows_notice() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Loaded));

    resolve_ok(&mut controller, request, json!({}));

    assert_eq!(controller.surfaces().metrics.content(), Some(&MetricsView::Empty));
    assert!(NO_METRICS.starts_with("No metrics available"));
}

#[test]
fn test_metrics_error_uses_metrics_phrasing() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Loaded));

    resolve_err(
        &mut controller,
        request,
        UiError::from_status(404, "Not Found", Some(r#"{"detail": "No metrics found for LightGBM in ahmedabad"}"#)),
    );

    let metrics = &controller.surfaces().metrics;
    assert!(!metrics.is_loading());
    assert_eq!(
        metrics.error_banner(),
        Some("Failed to fetch metrics: Error 404: No metrics found for LightGBM in ahmedabad")
    );
}

#[test]
fn test_card_title_uses_selection_at_issue_time() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::CityChanged("delhi".to_string())));
    controller.handle(UiEvent::ForecastTypeChanged(ForecastType::OneWeek));

    resolve_ok(&mut controller, request, json!({"overall": {"mae": 1.0}}));

    let card = controller.surfaces().metrics.content().and_then(MetricsView::card).unwrap();
    assert_eq!(card.title, "LightGBM Model Performance for Delhi");
}
