//! Request decoding with the legacy error contract.
//!
//! Handlers read the raw body and decode it here instead of using the
//! framework's JSON extractor: a malformed payload must produce the fixed
//! generic error object with a server-error status, not the framework's
//! default rejection, and must never reveal parse details.

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;

use ql_core::errors::DomainError;
use ql_shared::types::ErrorBody;

/// Decode a JSON request body.
///
/// # Returns
/// * `Ok(T)` - Body decoded; missing fields filled by serde defaults
/// * `Err(HttpResponse)` - Ready-to-send 500 carrying the generic error body
pub fn decode_json<T: DeserializeOwned>(body: &web::Bytes) -> Result<T, HttpResponse> {
    serde_json::from_slice(body).map_err(|error| {
        log::warn!("Failed to decode request body: {}", error);
        HttpResponse::InternalServerError().json(ErrorBody::default_error())
    })
}

/// Translate a domain-layer failure into the generic error response.
///
/// Store failures are the only errors the service surfaces; the wire
/// contract has a single error shape, so they all map to it.
pub fn internal_error_response(error: &DomainError) -> HttpResponse {
    log::error!("Login operation failed: {}", error);
    HttpResponse::InternalServerError().json(ErrorBody::default_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::login::CheckStatusRequest;

    #[test]
    fn valid_body_decodes() {
        let body = web::Bytes::from_static(br#"{"token":"abc"}"#);
        let request: CheckStatusRequest = decode_json(&body).unwrap();
        assert_eq!(request.token, "abc");
    }

    #[test]
    fn malformed_body_is_rejected() {
        let body = web::Bytes::from_static(b"not json");
        let result: Result<CheckStatusRequest, _> = decode_json(&body);
        let response = result.err().unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_body_is_rejected() {
        let body = web::Bytes::new();
        let result: Result<CheckStatusRequest, _> = decode_json(&body);
        assert!(result.is_err());
    }
}
