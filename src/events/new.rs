use axum::{
    Form, debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::warn;

use crate::{
    hub::{event::parse_date, NewEvent},
    publish::{EventPayload, Extras, Publisher, parse_max_participants},
    session, AppResult,
};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NewEventForm {
    title: Option<String>,
    category: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    description: Option<String>,
    requirements: Option<String>,
    max_participants: Option<String>,
}

const PUBLISH_FAILED: &str = "Failed to create event. Please check that your backend is running.";

impl NewEventForm {
    fn split(self) -> (NewEvent, Extras) {
        let Self {
            title,
            category,
            date,
            time,
            location,
            description,
            requirements,
            max_participants,
        } = self;
        (
            NewEvent {
                title: filled(title),
                location: filled(location),
                date: filled(date).as_deref().and_then(parse_date),
                description: filled(description),
            },
            Extras {
                category: filled(category),
                time: filled(time),
                requirements: filled(requirements),
                max_participants: max_participants.as_deref().map_or(0, parse_max_participants),
            },
        )
    }
}

fn filled(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_event(
    State(publisher): State<Publisher>,
    session: Session,

    Form(form): Form<NewEventForm>,
) -> AppResult<Response> {
    let mut hub = session::load_hub(&session).await?;
    if hub.role().is_none() {
        return Ok(Redirect::to("/login?return_url=/").into_response());
    }

    let (new, extras) = form.split();
    let event = hub.create_event(new);
    session::store_hub(&session, &hub).await?;

    // the local event stands whether or not the backend takes it
    match publisher.publish(&EventPayload::new(&event, extras)).await {
        Ok(()) => session::flash(&session, "Event created successfully!").await?,
        Err(e) => {
            warn!(error = %e, event = %event.id, "failed to publish event");
            session::flash(&session, PUBLISH_FAILED).await?;
        }
    }

    Ok(Redirect::to("/").into_response())
}
