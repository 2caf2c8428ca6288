//! Application factory
//!
//! This module provides the factory for creating the Actix-web application
//! with the login routes wired to a shared `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::login::{
    check_status::check_status, claim_token::claim_token, direct_login::direct_login,
    issue_token::issue_token, AppState,
};

use ql_core::repositories::{CredentialStore, SessionStore, TokenRegistry};

/// Create and configure the application with all dependencies
pub fn create_app<T, C, S>(
    app_state: web::Data<AppState<T, C, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    T: TokenRegistry + 'static,
    C: CredentialStore + 'static,
    S: SessionStore + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Login handoff routes (paths are the legacy compatibility surface)
        .route("/generateLoginToken", web::get().to(issue_token::<T, C, S>))
        .route(
            "/validateLoginToken",
            web::post().to(claim_token::<T, C, S>),
        )
        .route(
            "/checkLoginTokenStatus",
            web::post().to(check_status::<T, C, S>),
        )
        .route("/doLogin", web::post().to(direct_login::<T, C, S>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "qrlogin-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
