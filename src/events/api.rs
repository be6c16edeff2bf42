use axum::{
    Json, debug_handler,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    AppResult,
    hub::{Event, EventId, Hub, JoinOutcome, Role, User},
    session,
};

use super::join::message;

#[derive(Deserialize)]
pub(crate) struct EventsQuery {
    q: Option<String>,
}

#[derive(Serialize)]
struct EventView<'a> {
    #[serde(flatten)]
    event: &'a Event,
    joined: bool,
}

#[derive(Serialize)]
struct Me<'a> {
    role: Role,
    user: &'a User,
    joined: Vec<EventId>,
}

#[derive(Serialize)]
struct JoinView<'a> {
    outcome: &'static str,
    message: String,
    event: Option<&'a Event>,
    badge: Option<&'static str>,
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "log in first").into_response()
}

async fn logged_in(session: &Session) -> AppResult<Option<Hub>> {
    let hub = session::load_hub(session).await?;
    Ok(hub.role().is_some().then_some(hub))
}

#[debug_handler]
pub(crate) async fn events(
    Query(EventsQuery { q }): Query<EventsQuery>,
    session: Session,
) -> AppResult<Response> {
    let Some(hub) = logged_in(&session).await? else {
        return Ok(unauthorized());
    };

    let events: Vec<EventView> = hub
        .search(q.as_deref().unwrap_or_default())
        .into_iter()
        .map(|event| EventView { event, joined: hub.has_joined(event.id) })
        .collect();

    Ok(Json(events).into_response())
}

#[debug_handler]
pub(crate) async fn me(session: Session) -> AppResult<Response> {
    let hub = session::load_hub(&session).await?;
    let Some(role) = hub.role() else {
        return Ok(unauthorized());
    };

    Ok(Json(Me {
        role,
        user: hub.user(),
        joined: hub.joined().ids().collect(),
    }).into_response())
}

#[debug_handler]
pub(crate) async fn join_event(
    Path(id): Path<u32>,
    session: Session,
) -> AppResult<Response> {
    let Some(mut hub) = logged_in(&session).await? else {
        return Ok(unauthorized());
    };

    let outcome = hub.join_event(EventId(id));
    if outcome.is_joined() {
        session::store_hub(&session, &hub).await?;
    }

    let status = match outcome {
        JoinOutcome::Joined { .. } | JoinOutcome::AlreadyJoined => StatusCode::OK,
        JoinOutcome::NotFound => StatusCode::NOT_FOUND,
        JoinOutcome::Closed | JoinOutcome::AtCapacity => StatusCode::CONFLICT,
    };
    let (event, badge) = match &outcome {
        JoinOutcome::Joined { event, badge } => (Some(event), *badge),
        _ => (hub.catalog().get(EventId(id)), None),
    };

    Ok((status, Json(JoinView {
        outcome: outcome.as_str(),
        message: message(&outcome),
        event,
        badge,
    })).into_response())
}
