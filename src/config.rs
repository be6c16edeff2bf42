use std::{fmt::Display, str::FromStr};

use anyhow::{Context, anyhow};
use axum::http::HeaderValue;
use reqwest::Url;
use tracing::info;

/// Thirty days.
pub const MAX_SESSION_INACTIVITY_MINUTES: i64 = 60 * 24 * 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_inactivity_minutes: i64,
    pub cors_origins: Vec<HeaderValue>,
    pub events_api_url: Option<Url>,
}

impl Config {
    /// Reads the process environment, with `.env` layered underneath.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let cors_origins = try_load::<String>(
            &lookup,
            "CORS_ORIGINS",
            "http://localhost:5173,http://localhost:3000",
        )?
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("bad CORS origin {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

        let events_api_url = lookup("EVENTS_API_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                Url::parse(url.trim()).with_context(|| format!("bad EVENTS_API_URL {url:?}"))
            })
            .transpose()?;

        let session_inactivity_minutes = try_load(&lookup, "SESSION_INACTIVITY_MINUTES", "5")?;
        if !(1..=MAX_SESSION_INACTIVITY_MINUTES).contains(&session_inactivity_minutes) {
            return Err(anyhow!(
                "SESSION_INACTIVITY_MINUTES must be between 1 and {MAX_SESSION_INACTIVITY_MINUTES}"
            ));
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "8080")?,
            session_inactivity_minutes,
            cors_origins,
            events_api_url,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_owned()
    });
    raw.trim()
        .parse()
        .map_err(|e| anyhow!("invalid {key} value {raw:?}: {e}"))
}
