//! Metrics renderer: turns a [`MetricSet`] into an overall table plus one tab
//! per feature, each row carrying a formatted value and an interpretation.
//!
//! Labels, formats and thresholds are data ([`METRIC_KINDS`]); adding a metric
//! kind does not touch the rendering code.

use tracing::{debug, warn};

use crate::catalog;
use crate::payload::{MetricRecord, MetricSet};

pub const NO_METRICS: &str = "No metrics available for this model-city combination.";
pub const METRICS_TABLE_HEADERS: [&str; 3] = ["Metric", "Value", "Interpretation"];

/// Qualitative reading of a single metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Interpretation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Excellent | Self::Good => Severity::Good,
            Self::Moderate => Severity::Moderate,
            Self::Poor => Severity::Poor,
        }
    }
}

/// Visual class shared by interpretation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Moderate,
    Poor,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "metric-good",
            Self::Moderate => "metric-moderate",
            Self::Poor => "metric-poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ValueFormat {
    Fixed(usize),
    Percent(usize),
}

impl ValueFormat {
    fn apply(&self, value: f64) -> String {
        match *self {
            Self::Fixed(decimals) => to_fixed(value, decimals),
            Self::Percent(decimals) => format!("{}%", to_fixed(value, decimals)),
        }
    }
}

/// Fixed-point text where an exact tie at the cut rounds away from zero.
/// `{:.N}` alone would round such ties to even.
fn to_fixed(value: f64, decimals: usize) -> String {
    let magnitude = value.abs();
    let rounded = if exact_fraction_digits(magnitude) == decimals + 1 {
        // A terminating binary fraction always ends in 5, so this is a tie.
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };
    let text = format!("{:.*}", decimals, rounded);
    if value < 0.0 { format!("-{}", text) } else { text }
}

/// Number of digits after the point in the exact decimal expansion of `value`.
fn exact_fraction_digits(value: f64) -> usize {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    let scale = exponent + i64::from(mantissa.trailing_zeros());
    if scale < 0 { (-scale) as usize } else { 0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
    /// Tier applies when the value is strictly above its bound.
    HigherIsBetter,
    /// Tier applies when the value is strictly below its bound.
    LowerIsBetter,
}

/// Ordered tiers; the first bound the value passes wins, otherwise `fallback`.
#[derive(Debug)]
struct Thresholds {
    direction: Direction,
    tiers: &'static [(f64, Interpretation)],
    fallback: Interpretation,
}

impl Thresholds {
    fn classify(&self, value: f64) -> Interpretation {
        self.tiers
            .iter()
            .find(|(bound, _)| match self.direction {
                Direction::HigherIsBetter => value > *bound,
                Direction::LowerIsBetter => value < *bound,
            })
            .map(|(_, tier)| *tier)
            .unwrap_or(self.fallback)
    }
}

#[derive(Debug)]
struct MetricKind {
    key: &'static str,
    label: &'static str,
    format: ValueFormat,
    thresholds: Option<Thresholds>,
}

const DEFAULT_FORMAT: ValueFormat = ValueFormat::Fixed(4);

const METRIC_KINDS: &[MetricKind] = &[
    MetricKind {
        key: "mae",
        label: "Mean Absolute Error",
        format: DEFAULT_FORMAT,
        thresholds: None,
    },
    MetricKind {
        key: "rmse",
        label: "Root Mean Squared Error",
        format: DEFAULT_FORMAT,
        thresholds: None,
    },
    MetricKind {
        key: "mape",
        label: "Mean Absolute Percentage Error (%)",
        format: ValueFormat::Percent(2),
        thresholds: Some(Thresholds {
            direction: Direction::LowerIsBetter,
            tiers: &[
                (10.0, Interpretation::Excellent),
                (20.0, Interpretation::Good),
                (50.0, Interpretation::Moderate),
            ],
            fallback: Interpretation::Poor,
        }),
    },
    MetricKind {
        key: "r2",
        label: "R² Score",
        format: ValueFormat::Fixed(3),
        thresholds: Some(Thresholds {
            direction: Direction::HigherIsBetter,
            tiers: &[
                (0.8, Interpretation::Excellent),
                (0.6, Interpretation::Good),
                (0.4, Interpretation::Moderate),
            ],
            fallback: Interpretation::Poor,
        }),
    },
];

fn metric_kind(key: &str) -> Option<&'static MetricKind> {
    METRIC_KINDS.iter().find(|kind| kind.key == key)
}

/// Human label for a metric key; unknown keys are shown as-is.
pub fn metric_label(key: &str) -> &str {
    metric_kind(key).map(|kind| kind.label).unwrap_or(key)
}

pub fn format_value(key: &str, value: f64) -> String {
    metric_kind(key)
        .map(|kind| kind.format)
        .unwrap_or(DEFAULT_FORMAT)
        .apply(value)
}

/// `None` for every metric without thresholds (mae, rmse, unknown keys).
pub fn interpret(key: &str, value: f64) -> Option<Interpretation> {
    metric_kind(key)
        .and_then(|kind| kind.thresholds.as_ref())
        .map(|thresholds| thresholds.classify(value))
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub key: String,
    pub label: String,
    pub value: String,
    pub interpretation: Option<Interpretation>,
}

impl MetricRow {
    pub fn interpretation_text(&self) -> &'static str {
        self.interpretation.map(|i| i.label()).unwrap_or("")
    }

    pub fn css_class(&self) -> Option<&'static str> {
        self.interpretation.map(|i| i.severity().css_class())
    }
}

/// One scope's table: a row per non-null metric, in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    pub scope: String,
    pub rows: Vec<MetricRow>,
}

impl MetricsTable {
    pub fn from_record(scope: &str, record: &MetricRecord) -> Self {
        let rows = record
            .present()
            .map(|(key, value)| MetricRow {
                key: key.to_string(),
                label: metric_label(key).to_string(),
                value: format_value(key, value),
                interpretation: interpret(key, value),
            })
            .collect();

        Self {
            scope: scope.to_string(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTab {
    pub feature: String,
    pub table: MetricsTable,
}

/// Overall table plus feature tabs, exactly one of which is active.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsCard {
    pub title: String,
    pub overall: Option<MetricsTable>,
    pub tabs: Vec<FeatureTab>,
    active: usize,
}

impl MetricsCard {
    pub fn active_tab(&self) -> Option<&FeatureTab> {
        self.tabs.get(self.active)
    }

    pub fn is_active(&self, feature: &str) -> bool {
        self.active_tab().is_some_and(|tab| tab.feature == feature)
    }

    pub fn has_tabs(&self) -> bool {
        !self.tabs.is_empty()
    }

    /// Activates the tab for `feature`. Returns `false` if there is none.
    pub fn select_tab(&mut self, feature: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.feature == feature) {
            Some(index) => {
                self.active = index;
                debug!(feature, "metrics tab selected");
                true
            }
            None => {
                warn!(feature, "no metrics tab for feature");
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricsView {
    /// Zero scopes: a notice instead of any table scaffold.
    Empty,
    Card(MetricsCard),
}

impl MetricsView {
    pub fn build(set: &MetricSet, city: &str, model_name: &str) -> Self {
        if set.is_empty() {
            return Self::Empty;
        }

        let tabs: Vec<FeatureTab> = set
            .features()
            .map(|(feature, record)| FeatureTab {
                feature: feature.to_string(),
                table: MetricsTable::from_record(feature, record),
            })
            .collect();

        Self::Card(MetricsCard {
            title: format!(
                "{} Model Performance for {}",
                model_name,
                catalog::city_label(city)
            ),
            overall: set
                .overall()
                .map(|record| MetricsTable::from_record(MetricSet::OVERALL, record)),
            tabs,
            active: 0,
        })
    }

    pub fn card(&self) -> Option<&MetricsCard> {
        match self {
            Self::Card(card) => Some(card),
            Self::Empty => None,
        }
    }

    pub fn card_mut(&mut self) -> Option<&mut MetricsCard> {
        match self {
            Self::Card(card) => Some(card),
            Self::Empty => None,
        }
    }
}
