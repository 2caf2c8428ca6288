use actix_web::{web, HttpResponse};

use crate::dto::login::ClaimTokenRequest;
use crate::handlers::{decode_json, internal_error_response};

use ql_core::domain::value_objects::ClaimOutcome;
use ql_core::repositories::{CredentialStore, SessionStore, TokenRegistry};

use super::issue_token::AppState;

// Legacy payload for a claim of a token that was never issued. The trailing
// space is part of the contract.
const INVALID_TOKEN_TEXT: &str = "Invalid login token ";

/// Handler for POST /validateLoginToken
///
/// Binds an issued token to the user id supplied by the claiming device.
///
/// # Request Body
///
/// ```json
/// {"token": "<id>", "userid": "<id>"}
/// ```
///
/// # Response
///
/// * Bound: 200 with an empty body
/// * Unknown token: 200 with the string `"Invalid login token "` — the
///   transport status stays successful, callers distinguish by payload
/// * Malformed body: 500 with the generic error object
pub async fn claim_token<T, C, S>(
    state: web::Data<AppState<T, C, S>>,
    body: web::Bytes,
) -> HttpResponse
where
    T: TokenRegistry + 'static,
    C: CredentialStore + 'static,
    S: SessionStore + 'static,
{
    let request: ClaimTokenRequest = match decode_json(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state
        .login_service
        .claim_token(&request.token, &request.userid)
        .await
    {
        Ok(ClaimOutcome::Bound) => {
            log::info!("Login token claimed for userid: {}", request.userid);
            HttpResponse::Ok().finish()
        }
        Ok(ClaimOutcome::UnknownToken) => {
            log::warn!("Claim attempted for unknown login token");
            HttpResponse::Ok().json(INVALID_TOKEN_TEXT)
        }
        Err(error) => internal_error_response(&error),
    }
}
