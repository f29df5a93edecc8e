mod credentials;
mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::gate::Credential;
use crate::settings::Settings;
use crate::store::SessionStore;

pub use credentials::bearer_password;
pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub credential: Arc<Credential>,
    pub sessions: SessionStore,
    pub currency_symbol: Arc<str>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            credential: Arc::new(settings.credential.clone()),
            sessions: SessionStore::new(settings.session_ttl),
            currency_symbol: Arc::from(settings.currency_symbol.as_str()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/{id}", get(handlers::get_session))
        .route("/sessions/{id}", delete(handlers::end_session))
        .route("/sessions/{id}/disclaimer", post(handlers::accept_disclaimer))
        // Estimates
        .route(
            "/sessions/{id}/estimates/flowers-per-cane",
            post(handlers::estimate_flowers_per_cane),
        )
        .route("/sessions/{id}/estimates/revenue", post(handlers::estimate_revenue))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
