use common::UiError;
use serde_json::Value;
use crate::api_client;

/// Get a forecast from `GET /predict`
pub async fn get_prediction(url: &str) -> Result<Value, UiError> {
    log::trace!("Fetching forecast: {}", url);
    let result = api_client::get_json(url).await;
    match &result {
        Ok(Value::Array(rows)) => log::info!("Fetched {} forecast rows", rows.len()),
        Ok(_) => log::warn!("Forecast response is not an array"),
        Err(e) => log::error!("Failed to fetch forecast: {}", e),
    }
    result
}
