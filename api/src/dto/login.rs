use serde::{Deserialize, Serialize};

// Every request field carries `#[serde(default)]`: the legacy clients may
// omit fields, and a missing field must decode to an empty string rather
// than reject the request. Empty-string lookups then fall into the normal
// "invalid" paths downstream.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    /// Freshly issued login token
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimTokenRequest {
    /// Token being claimed
    #[serde(default)]
    pub token: String,

    /// User id to bind the token to, supplied by the claiming device
    #[serde(default)]
    pub userid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckStatusRequest {
    /// Token being polled
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenStatusResponse {
    /// Bound user id, empty while the token is unclaimed
    pub id: String,

    /// Whether the token has been claimed
    pub authenticated: bool,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct DirectLoginRequest {
    #[serde(default)]
    pub userid: String,

    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let request: ClaimTokenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.token, "");
        assert_eq!(request.userid, "");

        let request: DirectLoginRequest = serde_json::from_str(r#"{"userid":"u1"}"#).unwrap();
        assert_eq!(request.userid, "u1");
        assert_eq!(request.password, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: CheckStatusRequest =
            serde_json::from_str(r#"{"token":"abc","extra":42}"#).unwrap();
        assert_eq!(request.token, "abc");
    }

    #[test]
    fn status_response_uses_legacy_field_names() {
        let response = TokenStatusResponse {
            id: "u1".to_string(),
            authenticated: true,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u1", "authenticated": true}));
    }
}
