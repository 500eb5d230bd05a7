use crate::error::AppError;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::HashMap;

/// Liveness endpoint. Touches no external service; with the `details` flag it
/// also reports the process host identity.
pub async fn good_to_go(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    // Presence of the flag decides, not its value: `?details=` and
    // `?details=0` both report details.
    if !params.contains_key("details") {
        return Ok(StatusCode::OK.into_response());
    }

    let hostname = gethostname::gethostname().into_string().map_err(|raw| {
        AppError::Internal(anyhow::anyhow!("Host name is not valid UTF-8: {:?}", raw))
    })?;

    Ok(Json(json!({ "connected": "true", "hostname": hostname })).into_response())
}
