use axum::{debug_handler, extract::Path, response::{IntoResponse, Redirect, Response}};
use tower_sessions::Session;

use crate::{hub::{EventId, JoinOutcome}, res, session, AppResult};

#[debug_handler]
pub(crate) async fn join_event(
    Path(id): Path<u32>,
    session: Session,
) -> AppResult<Response> {
    let mut hub = session::load_hub(&session).await?;
    if hub.role().is_none() {
        return Ok(Redirect::to("/login?return_url=/").into_response());
    }

    let outcome = hub.join_event(EventId(id));
    if outcome == JoinOutcome::NotFound {
        return res::sorry("event");
    }
    session::store_hub(&session, &hub).await?;
    session::flash(&session, message(&outcome)).await?;

    Ok(Redirect::to("/").into_response())
}

pub(crate) fn message(outcome: &JoinOutcome) -> String {
    use JoinOutcome::*;
    match outcome {
        Joined { badge: Some(badge), .. } => format!("🏆 CONGRATULATIONS! You earned the '{badge}' Badge!"),
        Joined { event, badge: None } => format!("You joined {}.", event.title),
        AlreadyJoined => "You already joined this event.".to_owned(),
        NotFound => "That event doesn't exist.".to_owned(),
        Closed => "This event has already been completed.".to_owned(),
        AtCapacity => "This event is full.".to_owned(),
    }
}
