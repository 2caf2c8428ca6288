use actix_web::{web, HttpServer};
use log::info;
use std::io;
use std::sync::Arc;

use ql_core::domain::entities::Credential;
use ql_core::repositories::{
    CredentialStore, InMemoryCredentialStore, InMemorySessionStore, InMemoryTokenRegistry,
};
use ql_core::services::LoginService;
use ql_shared::config::AppConfig;

use ql_api::app::create_app;
use ql_api::routes::login::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting QrLogin API Server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Wire up the in-memory stores and the login service
    let tokens = Arc::new(InMemoryTokenRegistry::new());
    let credentials = Arc::new(InMemoryCredentialStore::new());
    let sessions = Arc::new(InMemorySessionStore::new());

    // Seed the credential store; this is the only write it ever sees
    for user in config.seed.users {
        info!("Seeding credentials for userid: {}", user.userid);
        credentials
            .insert(Credential::from(user))
            .await
            .map_err(|error| io::Error::new(io::ErrorKind::Other, error.to_string()))?;
    }

    let login_service = Arc::new(LoginService::new(tokens, credentials, sessions));
    let app_state = web::Data::new(AppState { login_service });

    let workers = config.server.workers;
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
