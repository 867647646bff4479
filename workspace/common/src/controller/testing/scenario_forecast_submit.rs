//! Submit-triggered forecast fetches and how their outcomes render.

use serde_json::json;

use super::*;
use crate::catalog::{ForecastType, Weekday};
use crate::forecast::ForecastView;

#[test]
fn test_submit_issues_predict_request_and_shows_loading() {
    let mut controller = controller();
    controller.handle(UiEvent::CityChanged("delhi".to_string()));
    controller.handle(UiEvent::ForecastTypeChanged(ForecastType::OneWeek));
    controller.handle(UiEvent::DayOfWeekChanged(Some(Weekday::Saturday)));

    let request = single_fetch(controller.handle(UiEvent::Submitted));

    assert_eq!(request.target, FetchTarget::Forecast);
    assert_eq!(
        request.url,
        "http://127.0.0.1:8000/predict?city=delhi&model_name=LightGBM&forecast_type=1week&day_of_week=5"
    );
    assert!(controller.surfaces().forecast.is_loading());
}

#[test]
fn test_successful_forecast_renders_table() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Submitted));

    resolve_ok(
        &mut controller,
        request,
        json!([
            {"date": "2024-06-01 00:00:00", "predicted_temp": 29.4},
            {"date": "2024-06-01 01:00:00", "predicted_temp": 28.9},
        ]),
    );

    let forecast = &controller.surfaces().forecast;
    assert!(!forecast.is_loading());
    let table = forecast.content().and_then(ForecastView::table).unwrap();
    assert_eq!(table.columns, vec!["date", "predicted_temp"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "2024-06-01 00:00:00");
    assert_eq!(table.rows[1][1], "28.9");
}

#[test]
fn test_empty_forecast_renders_notice() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Submitted));

    resolve_ok(&mut controller, request, json!([]));

    let forecast = &controller.surfaces().forecast;
    assert!(!forecast.is_loading());
    assert_eq!(forecast.content(), Some(&ForecastView::Empty));
    assert_eq!(forecast.error_banner(), None);
}

#[test]
fn test_not_found_shows_banner_and_clears_previous_table() {
    let mut controller = controller();
    let first = single_fetch(controller.handle(UiEvent::Submitted));
    resolve_ok(&mut controller, first, json!([{"date": "2024-06-01"}]));

    let second = single_fetch(controller.handle(UiEvent::Submitted));
    resolve_err(
        &mut controller,
        second,
        UiError::from_status(404, "Not Found", Some(r#"{"detail": "city not found"}"#)),
    );

    let forecast = &controller.surfaces().forecast;
    assert!(!forecast.is_loading());
    assert_eq!(forecast.content(), None);
    assert_eq!(
        forecast.error_banner(),
        Some("Failed to fetch forecast: Error 404: city not found")
    );
}

#[test]
fn test_transport_failure_shows_banner() {
    let mut controller = controller();
    let request = single_fetch(controller.handle(UiEvent::Submitted));

    resolve_err(&mut controller, request, UiError::transport("Failed to fetch"));

    assert_eq!(
        controller.surfaces().forecast.error_banner(),
        Some("Failed to fetch forecast: Failed to fetch")
    );
}

#[test]
fn test_forecast_errors_leave_metrics_panel_alone() {
    let mut controller = controller();
    let metrics = single_fetch(controller.handle(UiEvent::Loaded));
    resolve_ok(&mut controller, metrics, json!({"overall": {"r2": 0.9}}));

    let request = single_fetch(controller.handle(UiEvent::Submitted));
    resolve_err(&mut controller, request, UiError::transport("offline"));

    assert!(controller.surfaces().metrics.content().is_some());
}
