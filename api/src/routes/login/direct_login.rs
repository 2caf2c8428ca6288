use actix_web::{web, HttpResponse};

use crate::dto::login::DirectLoginRequest;
use crate::handlers::{decode_json, internal_error_response};

use ql_core::domain::value_objects::LoginOutcome;
use ql_core::repositories::{CredentialStore, SessionStore, TokenRegistry};

use super::issue_token::AppState;

const LOGIN_SUCCESS_TEXT: &str = "Login success";
const INVALID_CREDENTIALS_TEXT: &str = "Invalid userid or password";

/// Handler for POST /doLogin
///
/// Direct credential login. On success a fresh session is stored for the
/// user; the session identifier itself is never returned.
///
/// # Request Body
///
/// ```json
/// {"userid": "<id>", "password": "<pw>"}
/// ```
///
/// # Response
///
/// * Match: 200 with the string `"Login success"`
/// * Unknown user or wrong password: 200 with the string
///   `"Invalid userid or password"` — indistinguishable on purpose
/// * Malformed body: 500 with the generic error object
pub async fn direct_login<T, C, S>(
    state: web::Data<AppState<T, C, S>>,
    body: web::Bytes,
) -> HttpResponse
where
    T: TokenRegistry + 'static,
    C: CredentialStore + 'static,
    S: SessionStore + 'static,
{
    let request: DirectLoginRequest = match decode_json(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state
        .login_service
        .direct_login(&request.userid, &request.password)
        .await
    {
        Ok(LoginOutcome::Success { .. }) => {
            log::info!("Direct login succeeded for userid: {}", request.userid);
            HttpResponse::Ok().json(LOGIN_SUCCESS_TEXT)
        }
        Ok(LoginOutcome::InvalidCredentials) => {
            log::warn!("Direct login rejected for userid: {}", request.userid);
            HttpResponse::Ok().json(INVALID_CREDENTIALS_TEXT)
        }
        Err(error) => internal_error_response(&error),
    }
}
