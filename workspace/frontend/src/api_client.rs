pub mod model_metrics;
pub mod predict;

use common::{FetchRequest, FetchTarget, UiError};
use gloo_net::http::{Request, Response};
use serde_json::Value;

/// Common GET request handler.
///
/// Transport failures, non-2xx responses and non-JSON bodies all come back as
/// a [`UiError`]. A 2xx JSON body is returned as-is, without any schema check.
pub async fn get_json(url: &str) -> Result<Value, UiError> {
    log::debug!("GET request to: {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        let err = UiError::transport(e);
        log::error!("GET {} - Request failed: {}", url, err);
        err
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", url, response.status());
        let err = error_from_response(&response).await;
        log::error!("GET {} - {}", url, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let body = response
        .text()
        .await
        .map_err(|e| UiError::decode(response.status(), e))?;

    let value = serde_json::from_str::<Value>(&body).map_err(|e| {
        let err = UiError::decode(response.status(), e);
        log::error!("GET {} - {}", url, err);
        err
    })?;

    log::info!("GET {} - Success", url);
    Ok(value)
}

async fn error_from_response(response: &Response) -> UiError {
    let body = response.text().await.ok().filter(|body| !body.is_empty());
    UiError::from_status(response.status(), &response.status_text(), body.as_deref())
}

/// Performs a fetch the controller asked for.
pub async fn execute(request: &FetchRequest) -> Result<Value, UiError> {
    match &request.target {
        FetchTarget::Forecast => predict::get_prediction(&request.url).await,
        FetchTarget::Metrics { city, model_name } => {
            model_metrics::get_model_metrics(&request.url, city, model_name).await
        }
    }
}
