use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::dto::login::IssueTokenResponse;
use crate::handlers::internal_error_response;

use ql_core::repositories::{CredentialStore, SessionStore, TokenRegistry};
use ql_core::services::LoginService;
use ql_shared::types::ErrorBody;

/// Application state that holds the shared login service
pub struct AppState<T, C, S>
where
    T: TokenRegistry,
    C: CredentialStore,
    S: SessionStore,
{
    pub login_service: Arc<LoginService<T, C, S>>,
}

/// Handler for GET /generateLoginToken
///
/// Issues a fresh login token for the device starting the handoff.
///
/// # Response
///
/// 200 with a JSON **string** containing the serialized token object:
///
/// ```json
/// "{\"token\":\"550e8400-e29b-41d4-a716-446655440000\"}"
/// ```
///
/// The double encoding is part of the legacy contract — clients parse the
/// string body, then parse the object out of it.
pub async fn issue_token<T, C, S>(state: web::Data<AppState<T, C, S>>) -> HttpResponse
where
    T: TokenRegistry + 'static,
    C: CredentialStore + 'static,
    S: SessionStore + 'static,
{
    match state.login_service.issue_token().await {
        Ok(issued) => {
            log::info!("Issued login token: {}", issued.token);

            let payload = IssueTokenResponse {
                token: issued.token,
            };
            match serde_json::to_string(&payload) {
                Ok(encoded) => HttpResponse::Ok().json(encoded),
                Err(error) => {
                    log::error!("Failed to encode token response: {}", error);
                    HttpResponse::InternalServerError().json(ErrorBody::default_error())
                }
            }
        }
        Err(error) => internal_error_response(&error),
    }
}
