//! HTTP handlers for the HSN validation API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use hsn_core::{validate, ValidationResult};

use crate::error::ApiError;
use crate::models::{ValidateRequest, ValidateResponse};
use crate::state::AppState;

/// Landing page describing the validation endpoints.
pub async fn home() -> Html<&'static str> {
    Html(
        "<h1>HSN Code Validation API</h1>\n\
         <p>Endpoints:</p>\n\
         <ul>\n\
             <li>GET /validate/&lt;hsn_code&gt; - Validate single code</li>\n\
             <li>POST /validate - Validate multiple codes (JSON payload)</li>\n\
         </ul>",
    )
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Validates a single HSN code taken from the URL path.
pub async fn validate_single(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Json<ValidationResult> {
    Json(validate(&code, &state.table))
}

/// Validates a batch of HSN codes from a JSON payload.
///
/// The body must carry a `codes` field holding a string or an array of
/// strings. An unreadable body or a payload without `codes` is a 400 with a
/// fixed error object; results come back in input order.
pub async fn validate_multiple(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<ValidateRequest>>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let codes = payload
        .and_then(|Json(req)| req.codes)
        .ok_or(ApiError::MissingCodes)?
        .into_codes();

    let results = codes
        .iter()
        .map(|code| validate(code, &state.table))
        .collect();

    Ok(Json(ValidateResponse { results }))
}
