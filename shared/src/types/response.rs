//! Legacy wire types shared between the API layer and its tests.

use serde::{Deserialize, Serialize};

/// Fixed error code carried by every decode-failure response.
pub const GENERIC_ERROR_CODE: &str = "200000";

/// Fixed error message carried by every decode-failure response.
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";

/// Generic error body returned when a request payload cannot be decoded.
///
/// The contract is deliberately non-descriptive: the same `id`/`text` pair
/// is returned for every operation, and no parse detail is revealed to the
/// caller. Business failures (unknown token, bad credentials) do not use
/// this shape; they ride a 200 with a plain string payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub id: String,

    /// Human-readable error message
    pub text: String,
}

impl ErrorBody {
    /// Create the fixed generic error body.
    pub fn default_error() -> Self {
        Self {
            id: GENERIC_ERROR_CODE.to_string(),
            text: GENERIC_ERROR_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_error_matches_legacy_shape() {
        let body = ErrorBody::default_error();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "200000", "text": "An error occurred"})
        );
    }

    #[test]
    fn error_body_round_trips_field_names() {
        let parsed: ErrorBody =
            serde_json::from_str(r#"{"id":"200000","text":"An error occurred"}"#).unwrap();
        assert_eq!(parsed, ErrorBody::default_error());
    }
}
