use common::UiError;
use serde_json::Value;
use crate::api_client;

/// Get model quality metrics from `GET /model-metrics`
pub async fn get_model_metrics(url: &str, city: &str, model_name: &str) -> Result<Value, UiError> {
    log::trace!("Fetching metrics for {} in {}", model_name, city);
    let result = api_client::get_json(url).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch metrics for {} in {}: {}", model_name, city, e);
    } else {
        log::info!("Successfully fetched metrics for {} in {}", model_name, city);
    }

    result
}
