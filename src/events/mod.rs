mod api;
mod join;
mod new;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(new::new_event))
        .route("/{id}/join", post(join::join_event))
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/events", get(api::events))
        .route("/events/{id}/join", post(api::join_event))
        .route("/me", get(api::me))
}
