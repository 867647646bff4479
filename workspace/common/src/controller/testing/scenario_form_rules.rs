//! Form visibility rules as seen through controller events.

use super::*;
use crate::catalog::{ForecastType, ProphetHorizon, Weekday};
use crate::query::forecast_params;

#[test]
fn test_forecast_type_changes_never_fetch() {
    let mut controller = controller();

    let effects = controller.handle(UiEvent::ForecastTypeChanged(ForecastType::OneWeek));

    assert!(effects.is_empty());
    assert!(controller.surfaces().form.visibility().day_of_week);
}

#[test]
fn test_hidden_day_of_week_is_cleared_and_never_sent() {
    let mut controller = controller();
    controller.handle(UiEvent::ForecastTypeChanged(ForecastType::TwoWeeks));
    controller.handle(UiEvent::DayOfWeekChanged(Some(Weekday::Thursday)));

    controller.handle(UiEvent::ForecastTypeChanged(ForecastType::Hours48));

    assert!(!controller.surfaces().form.visibility().day_of_week);
    assert_eq!(controller.form_state().day_of_week, None);

    let request = single_fetch(controller.handle(UiEvent::Submitted));
    assert!(!request.url.contains("day_of_week"));
}

#[test]
fn test_load_applies_prophet_rule_to_preselected_model() {
    let mut controller = controller_with(
        FormState {
            model_name: "Prophet".to_string(),
            ..FormState::default()
        },
        StaleResponsePolicy::default(),
    );
    assert!(!controller.surfaces().form.visibility().prophet_options);

    controller.handle(UiEvent::Loaded);

    assert!(controller.surfaces().form.visibility().prophet_options);
}

#[test]
fn test_switching_away_from_prophet_resets_options() {
    let mut controller = controller();
    controller.handle(UiEvent::Loaded);
    controller.handle(UiEvent::ModelChanged("Prophet".to_string()));
    controller.handle(UiEvent::ProphetExtendedChanged(Some(ProphetHorizon::OneMonth)));
    controller.handle(UiEvent::IncludeBoundsToggled(true));
    assert_eq!(forecast_params(controller.form_state()).get("include_bounds"), Some("true"));

    controller.handle(UiEvent::ModelChanged("ExtraTrees".to_string()));

    let state = controller.form_state();
    assert!(!controller.surfaces().form.visibility().prophet_options);
    assert_eq!(state.prophet_extended, None);
    assert!(!state.include_bounds);
    assert!(!forecast_params(state).contains_key("include_bounds"));
}
