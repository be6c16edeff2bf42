use reqwest::Url;
use serde::Serialize;
use tracing::info;

use crate::hub::Event;

/// Body of `POST /api/v1/events/` on the events backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub max_participants: u32,
    pub requirements: Option<String>,
    pub image: Option<String>,
}

/// Form fields the local catalog has no place for but the backend wants.
#[derive(Debug, Clone, Default)]
pub struct Extras {
    pub category: Option<String>,
    pub time: Option<String>,
    pub requirements: Option<String>,
    pub max_participants: u32,
}

impl EventPayload {
    pub fn new(event: &Event, extras: Extras) -> Self {
        Self {
            title: event.title.clone(),
            category: extras.category.unwrap_or_default(),
            date: event.date_string(),
            time: extras.time.unwrap_or_default(),
            location: event.location.clone(),
            description: event.description.clone(),
            max_participants: extras.max_participants,
            requirements: extras.requirements,
            image: None,
        }
    }
}

/// Leading digits of `raw`, or 0 when there are none.
pub fn parse_max_participants(raw: &str) -> u32 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[derive(Debug, Clone)]
pub struct Publisher {
    http_client: reqwest::Client,
    events_url: Option<Url>,
}

impl Publisher {
    pub fn new(base_url: Option<Url>) -> anyhow::Result<Self> {
        let events_url = base_url.map(events_endpoint).transpose()?;
        Ok(Self {
            http_client: reqwest::Client::new(),
            events_url,
        })
    }

    pub fn disabled() -> Self {
        Self {
            http_client: reqwest::Client::new(),
            events_url: None,
        }
    }

    pub fn events_url(&self) -> Option<&Url> {
        self.events_url.as_ref()
    }

    /// Does nothing without a configured backend. Failures are never retried.
    pub async fn publish(&self, payload: &EventPayload) -> anyhow::Result<()> {
        let Some(url) = self.events_url.clone() else {
            return Ok(());
        };

        let body: serde_json::Value = self.http_client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(response = %body, title = %payload.title, "event published");
        Ok(())
    }
}

/// `{base}/api/v1/events/`, keeping any path already on `base`.
fn events_endpoint(mut base: Url) -> anyhow::Result<Url> {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("api/v1/events/")?)
}
