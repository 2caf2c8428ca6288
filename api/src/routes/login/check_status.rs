use actix_web::{web, HttpResponse};

use crate::dto::login::{CheckStatusRequest, TokenStatusResponse};
use crate::handlers::{decode_json, internal_error_response};

use ql_core::domain::value_objects::TokenStatus;
use ql_core::repositories::{CredentialStore, SessionStore, TokenRegistry};

use super::issue_token::AppState;

const INVALID_TOKEN_TEXT: &str = "Invalid login token";

/// Handler for POST /checkLoginTokenStatus
///
/// Point-in-time read of a token's claim status. The issuing device polls
/// this endpoint until `authenticated` flips to true; there is no push or
/// long-poll mechanism.
///
/// # Request Body
///
/// ```json
/// {"token": "<id>"}
/// ```
///
/// # Response
///
/// * Pending: 200 with `{"id": "", "authenticated": false}`
/// * Claimed: 200 with `{"id": "<userid>", "authenticated": true}`
/// * Unknown token: 200 with the string `"Invalid login token"`
/// * Malformed body: 500 with the generic error object
pub async fn check_status<T, C, S>(
    state: web::Data<AppState<T, C, S>>,
    body: web::Bytes,
) -> HttpResponse
where
    T: TokenRegistry + 'static,
    C: CredentialStore + 'static,
    S: SessionStore + 'static,
{
    let request: CheckStatusRequest = match decode_json(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.login_service.check_status(&request.token).await {
        Ok(TokenStatus::UnknownToken) => {
            log::warn!("Status poll for unknown login token");
            HttpResponse::Ok().json(INVALID_TOKEN_TEXT)
        }
        Ok(TokenStatus::Pending) => HttpResponse::Ok().json(TokenStatusResponse {
            id: String::new(),
            authenticated: false,
        }),
        Ok(TokenStatus::Authenticated { userid }) => {
            log::info!("Status poll answered authenticated for userid: {}", userid);
            HttpResponse::Ok().json(TokenStatusResponse {
                id: userid,
                authenticated: true,
            })
        }
        Err(error) => internal_error_response(&error),
    }
}
