//! Target-independent core of the weather dashboard.
//!
//! Everything with real logic lives here so it can be exercised without a
//! browser: the form rules, query building, error normalization, payload
//! decoding, the two table renderers and the event-driven controller that
//! ties them together. The wasm frontend only renders [`controller::Surfaces`]
//! and executes the [`controller::Effect`]s the controller hands back.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod forecast;
pub mod form;
pub mod metrics;
pub mod panel;
pub mod payload;
pub mod query;

pub use catalog::{ForecastType, ProphetHorizon, UnknownChoice, Weekday};
pub use controller::{Controller, Effect, FetchRequest, FetchTarget, RequestId, StaleResponsePolicy, Surfaces, UiEvent};
pub use error::{UiError, UiErrorKind};
pub use forecast::{ForecastTable, ForecastView};
pub use form::{FieldVisibility, Form, FormState};
pub use metrics::{FeatureTab, Interpretation, MetricsCard, MetricsTable, MetricsView, Severity};
pub use panel::{FetchState, Panel};
pub use payload::{ForecastRow, MetricRecord, MetricSet};
pub use query::QueryParams;
