pub mod appresult;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod events;
pub mod hub;
pub mod publish;
pub mod res;
pub mod session;

use axum::{
    Router,
    extract::FromRef,
    http::{Method, header::CONTENT_TYPE},
};
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

pub use appresult::{AppError, AppResult};
pub use config::Config;
pub use publish::Publisher;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub publisher: Publisher,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(dashboard::router())
        .merge(auth::router())
        .nest("/events", events::router())
        .nest("/api", events::api_router())
        .with_state(state)
}

/// The full service: routes, per-browser sessions and CORS.
pub fn app(config: &Config, state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.session_inactivity_minutes,
        )));

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origins.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    router(state).layer(session_layer).layer(cors)
}
