//! Uniform envelope for outward-facing error payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

/// Fixed-shape JSON object used for every error response:
/// `{"data": ..., "code": ..., "request_id": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Value,
    pub code: i64,
    pub request_id: String,
}

/// Assemble an [`Envelope`] from a request id, numeric code, and payload.
///
/// `request_id` is stringified; `message` is converted to a JSON value.
/// Conversion can fail for exotic `Serialize` impls; that failure is logged
/// and swallowed, and the caller gets `None` instead of an envelope.
pub fn build_response(
    request_id: impl ToString,
    code: i64,
    message: impl Serialize,
) -> Option<Envelope> {
    match serde_json::to_value(message) {
        Ok(data) => Some(Envelope {
            data,
            code,
            request_id: request_id.to_string(),
        }),
        Err(err) => {
            error!(error = %err, "failed to assemble response envelope");
            None
        }
    }
}
