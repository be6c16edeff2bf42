mod organizer;
mod volunteer;

use axum::{
    Router, debug_handler,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{hub::{Hub, Role}, include_res, res, session, AppResult, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
}

#[derive(Deserialize)]
pub(crate) struct DashboardQuery {
    q: Option<String>,
}

#[debug_handler]
pub(crate) async fn index(
    Query(DashboardQuery { q }): Query<DashboardQuery>,
    session: Session,
) -> AppResult<Response> {
    let hub = session::load_hub(&session).await?;
    let Some(role) = hub.role() else {
        return Ok(Redirect::to("/login").into_response());
    };
    let flash = session::take_flash(&session).await?;

    let (heading, body) = match role {
        Role::Volunteer => ("Volunteer Dashboard", volunteer::render(&hub, q.as_deref().unwrap_or_default())),
        Role::Organizer => ("Organizer Dashboard", organizer::render(&hub)),
    };

    Ok(Html(layout(&hub, role, heading, flash.as_deref(), &body)).into_response())
}

fn layout(hub: &Hub, role: Role, heading: &str, flash: Option<&str>, body: &str) -> String {
    let flash = flash
        .map(|message| include_res!(str, "/pages/flash.html").replace("{message}", &res::escape(message)))
        .unwrap_or_default();

    include_res!(str, "/pages/layout.html")
        .replace("{heading}", heading)
        .replace("{mode}", role.mode_label())
        .replace("{user_name}", &res::escape(&hub.user().name))
        .replace("{flash}", &flash)
        .replace("{body}", body)
}
