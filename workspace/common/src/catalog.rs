//! Fixed choices offered by the forecast form.
//!
//! The prediction service validates every value it receives against the same
//! lists, so the select controls only ever offer what is listed here.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Cities the prediction service has trained models for (select values).
pub const CITIES: &[&str] = &["ahmedabad", "mumbai", "delhi", "bengaluru"];

/// Model identifiers accepted by both endpoints.
pub const MODELS: &[&str] = &[
    "LightGBM",
    "CatBoost",
    "ExtraTrees",
    "XGBoost",
    "HistGradientBoosting",
    "Prophet",
    "Ensemble",
];

/// The only model with extended horizons and uncertainty bounds.
pub const PROPHET_MODEL: &str = "Prophet";

pub fn is_prophet(model_name: &str) -> bool {
    model_name == PROPHET_MODEL
}

/// Display form of a city id: first character upper-cased.
pub fn city_label(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A select value that matches none of the known choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownChoice {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Forecast horizon selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForecastType {
    #[default]
    Hours48,
    OneWeek,
    TwoWeeks,
}

impl ForecastType {
    pub const ALL: [ForecastType; 3] = [Self::Hours48, Self::OneWeek, Self::TwoWeeks];

    /// Wire value of the `forecast_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours48 => "48h",
            Self::OneWeek => "1week",
            Self::TwoWeeks => "2weeks",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hours48 => "48 Hours",
            Self::OneWeek => "1 Week",
            Self::TwoWeeks => "2 Weeks",
        }
    }

    /// Whether a day-of-week filter applies to this horizon.
    pub fn carries_day_of_week(&self) -> bool {
        matches!(self, Self::OneWeek | Self::TwoWeeks)
    }
}

impl fmt::Display for ForecastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownChoice::new("forecast type", s))
    }
}

/// Day-of-week filter, sent as `0` (Monday) through `6` (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn index(&self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(|index| Self::ALL.get(usize::from(index)).copied())
            .ok_or_else(|| UnknownChoice::new("day of week", s))
    }
}

/// Extended horizon only the Prophet model supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProphetHorizon {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl ProphetHorizon {
    pub const ALL: [ProphetHorizon; 4] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::OneYear => "1year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
        }
    }
}

impl FromStr for ProphetHorizon {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| UnknownChoice::new("prophet horizon", s))
    }
}
