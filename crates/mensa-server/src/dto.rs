//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
///
/// `input` defaults to empty when the field is absent, and the whole
/// struct defaults when the body fails to parse, so both take the same
/// validation path as a blank input.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub input: String,
}

/// Response body for the chat endpoint.
///
/// Every response, success or failure, carries exactly this shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub output: String,
}
