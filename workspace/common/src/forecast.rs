//! Forecast renderer: a generic table whose columns come from the first row.

use serde_json::Value;

use crate::payload::ForecastRow;

pub const NO_FORECAST_DATA: &str = "No forecast data available for the selected criteria.";

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    /// Raw keys of the first row, in order.
    pub columns: Vec<String>,
    /// One entry per input row, one cell per column.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastView {
    /// Zero rows: a notice instead of an empty table shell.
    Empty,
    Table(ForecastTable),
}

impl ForecastView {
    /// Rows are assumed homogeneous; later rows are read through the first
    /// row's columns only.
    pub fn build(rows: &[ForecastRow]) -> Self {
        let Some(first) = rows.first() else {
            return Self::Empty;
        };

        let columns: Vec<String> = first.keys().cloned().collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| plain_text(row.get(column)))
                    .collect()
            })
            .collect();

        Self::Table(ForecastTable { columns, rows })
    }

    pub fn table(&self) -> Option<&ForecastTable> {
        match self {
            Self::Table(table) => Some(table),
            Self::Empty => None,
        }
    }
}

/// Plain string conversion of a cell, as a text node would show it.
/// Missing and null cells are empty; no numeric formatting is applied.
pub fn plain_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => number_text(f),
            _ => n.to_string(),
        },
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| plain_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip digits, switching to exponent form outside
/// `[1e-6, 1e21)` the way a text node shows a number.
fn number_text(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((digits, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", digits, exponent),
            _ => text,
        }
    } else {
        value.to_string()
    }
}
