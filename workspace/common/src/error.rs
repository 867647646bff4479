use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Where a failed fetch went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorKind {
    /// No response at all: DNS, refused connection, timeout.
    Transport,
    /// A non-2xx response, with or without a `detail` body.
    Application,
    /// A 2xx response whose body is not JSON.
    Decode,
}

/// Normalized failure shown in a panel's error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UiError {
    pub kind: UiErrorKind,
    pub http_status: Option<u16>,
    pub message: String,
}

/// Error body returned by the prediction service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl UiError {
    pub fn transport(description: impl std::fmt::Display) -> Self {
        Self {
            kind: UiErrorKind::Transport,
            http_status: None,
            message: description.to_string(),
        }
    }

    /// Normalizes a non-2xx response.
    ///
    /// - `detail` present: `Error {status}: {detail}`
    /// - JSON body without a usable `detail`: `Error {status}: {statusText}`
    /// - body absent or not JSON: `Error: {status} {statusText}`
    pub fn from_status(status: u16, status_text: &str, body: Option<&str>) -> Self {
        let message = match body.and_then(parse_error_body) {
            Some(Some(detail)) => format!("Error {}: {}", status, detail),
            Some(None) => format!("Error {}: {}", status, status_text),
            None => format!("Error: {} {}", status, status_text).trim_end().to_string(),
        };

        Self {
            kind: UiErrorKind::Application,
            http_status: Some(status),
            message,
        }
    }

    pub fn decode(status: u16, reason: impl std::fmt::Display) -> Self {
        Self {
            kind: UiErrorKind::Decode,
            http_status: Some(status),
            message: format!("Failed to parse response: {}", reason),
        }
    }

    /// Single banner line, e.g. `Failed to fetch forecast: Error 404: city not found`.
    pub fn banner(&self, subject: &str) -> String {
        format!("Failed to fetch {}: {}", subject, self.message)
    }
}

/// `None` when the body is absent, unparsable or JSON `null`; `Some(None)`
/// when it is JSON but carries no usable detail.
fn parse_error_body(body: &str) -> Option<Option<String>> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = match value {
        Value::Null => return None,
        Value::Object(_) => serde_json::from_value::<ErrorBody>(value).ok()?.detail,
        // Arrays and scalars have no `detail` field.
        _ => None,
    };

    Some(match detail {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(detail)) if detail.is_empty() => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(detail)) => Some(detail),
        // Validation errors arrive as structured detail.
        Some(other) => Some(other.to_string()),
    })
}
