//! Decoding of 2xx payloads.
//!
//! The API client hands bodies over as raw JSON. Shape mismatches are not
//! errors here: anything unexpected degrades to "less data" and is logged.

use serde_json::{Map, Value};
use tracing::warn;

/// One forecast row: column name to scalar, in the payload's key order.
pub type ForecastRow = Map<String, Value>;

/// Rows of a `/predict` response. A body that is not an array yields no rows.
pub fn forecast_rows(payload: &Value) -> Vec<ForecastRow> {
    let Some(items) = payload.as_array() else {
        warn!(kind = json_kind(payload), "forecast payload is not an array, treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => row.clone(),
            other => {
                warn!(index, kind = json_kind(other), "forecast row is not an object");
                Map::new()
            }
        })
        .collect()
}

/// Metric key to nullable value, in the record's own key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricRecord {
    entries: Vec<(String, Option<f64>)>,
}

impl MetricRecord {
    pub fn new(entries: Vec<(String, Option<f64>)>) -> Self {
        Self { entries }
    }

    pub fn from_map(scope: &str, map: &Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .map(|(key, value)| {
                let number = match value {
                    Value::Null => None,
                    Value::Number(n) => n.as_f64(),
                    other => {
                        warn!(scope, metric = %key, kind = json_kind(other), "non-numeric metric value ignored");
                        None
                    }
                };
                (key.clone(), number)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| *v)
    }

    /// Every entry, nulls included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries with a value, in key order.
    pub fn present(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.map(|value| (k.as_str(), value)))
    }
}

/// Scope name (`overall` or a feature) to its metrics, in payload order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricSet {
    scopes: Vec<(String, MetricRecord)>,
}

impl MetricSet {
    pub const OVERALL: &'static str = "overall";

    pub fn new(scopes: Vec<(String, MetricRecord)>) -> Self {
        Self { scopes }
    }

    /// Decodes a `/model-metrics` body. Non-object bodies yield an empty set;
    /// scopes that are not objects are skipped.
    pub fn from_value(payload: &Value) -> Self {
        let Some(map) = payload.as_object() else {
            warn!(kind = json_kind(payload), "metrics payload is not an object, treating as empty");
            return Self::default();
        };

        let scopes = map
            .iter()
            .filter_map(|(scope, record)| match record {
                Value::Object(fields) => Some((scope.clone(), MetricRecord::from_map(scope, fields))),
                other => {
                    warn!(scope = %scope, kind = json_kind(other), "metric scope is not an object, skipped");
                    None
                }
            })
            .collect();
        Self { scopes }
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn overall(&self) -> Option<&MetricRecord> {
        self.scopes
            .iter()
            .find(|(scope, _)| scope == Self::OVERALL)
            .map(|(_, record)| record)
    }

    /// Non-overall scopes in iteration order.
    pub fn features(&self) -> impl Iterator<Item = (&str, &MetricRecord)> {
        self.scopes
            .iter()
            .filter(|(scope, _)| scope != Self::OVERALL)
            .map(|(scope, record)| (scope.as_str(), record))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
