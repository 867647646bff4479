//! Forecast form state and the rules that keep its auxiliary fields consistent.

use tracing::debug;

use crate::catalog::{self, ForecastType, ProphetHorizon, Weekday};

/// Current values of every form control.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub city: String,
    pub model_name: String,
    pub forecast_type: ForecastType,
    /// Only meaningful when `forecast_type` carries a day of week.
    pub day_of_week: Option<Weekday>,
    /// Only meaningful when the Prophet model is selected.
    pub prophet_extended: Option<ProphetHorizon>,
    pub include_bounds: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            city: catalog::CITIES[0].to_string(),
            model_name: catalog::MODELS[0].to_string(),
            forecast_type: ForecastType::default(),
            day_of_week: None,
            prophet_extended: None,
            include_bounds: false,
        }
    }
}

impl FormState {
    pub fn is_prophet(&self) -> bool {
        catalog::is_prophet(&self.model_name)
    }

    /// Both selections the metrics panel is keyed on are present.
    pub fn has_metrics_scope(&self) -> bool {
        !self.city.is_empty() && !self.model_name.is_empty()
    }
}

/// Visibility of the optional control groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisibility {
    pub day_of_week: bool,
    pub prophet_options: bool,
}

/// Form values together with the visibility of their controls.
///
/// Every mutation goes through a method here so that a hidden control never
/// keeps a value that could be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    state: FormState,
    visibility: FieldVisibility,
}

impl Form {
    /// The day-of-week group follows the initial forecast type and a day
    /// given for a non-weekly type is dropped. The Prophet group stays hidden
    /// until [`Form::apply_load_rules`] runs.
    pub fn new(mut state: FormState) -> Self {
        if !state.forecast_type.carries_day_of_week() {
            state.day_of_week = None;
        }
        let visibility = FieldVisibility {
            day_of_week: state.forecast_type.carries_day_of_week(),
            prophet_options: false,
        };
        Self { state, visibility }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.visibility
    }

    /// Applies the Prophet rule once against the pre-selected model.
    pub fn apply_load_rules(&mut self) {
        self.apply_prophet_rule();
    }

    pub fn set_city(&mut self, city: String) {
        self.state.city = city;
    }

    pub fn set_forecast_type(&mut self, forecast_type: ForecastType) {
        self.state.forecast_type = forecast_type;
        if forecast_type.carries_day_of_week() {
            self.visibility.day_of_week = true;
        } else {
            self.visibility.day_of_week = false;
            self.state.day_of_week = None;
        }
        debug!(%forecast_type, visible = self.visibility.day_of_week, "day-of-week group updated");
    }

    pub fn set_day_of_week(&mut self, day_of_week: Option<Weekday>) {
        self.state.day_of_week = day_of_week;
    }

    pub fn set_model(&mut self, model_name: String) {
        self.state.model_name = model_name;
        self.apply_prophet_rule();
    }

    pub fn set_prophet_extended(&mut self, horizon: Option<ProphetHorizon>) {
        self.state.prophet_extended = horizon;
    }

    pub fn set_include_bounds(&mut self, include_bounds: bool) {
        self.state.include_bounds = include_bounds;
    }

    fn apply_prophet_rule(&mut self) {
        if self.state.is_prophet() {
            self.visibility.prophet_options = true;
        } else {
            self.visibility.prophet_options = false;
            self.state.prophet_extended = None;
            self.state.include_bounds = false;
        }
        debug!(model = %self.state.model_name, visible = self.visibility.prophet_options, "prophet options updated");
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormState::default())
    }
}
