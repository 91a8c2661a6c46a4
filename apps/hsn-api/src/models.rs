//! Request and response bodies for the HSN validation API.

use hsn_core::ValidationResult;
use serde::{Deserialize, Serialize};

/// Payload for `POST /validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub codes: Option<CodesInput>,
}

/// The `codes` field accepts a single code or a list of codes; a bare string
/// is treated as a one-element list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CodesInput {
    One(String),
    Many(Vec<String>),
}

impl CodesInput {
    pub fn into_codes(self) -> Vec<String> {
        match self {
            CodesInput::One(code) => vec![code],
            CodesInput::Many(codes) => codes,
        }
    }
}

/// Response for `POST /validate`: one result per submitted code, in input
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub results: Vec<ValidationResult>,
}
