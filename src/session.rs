use tower_sessions::Session;

use crate::{AppResult, hub::Hub};

pub const HUB: &str = "hub";
pub const FLASH: &str = "flash";

/// The session's hub, seeded on first use.
pub async fn load_hub(session: &Session) -> AppResult<Hub> {
    Ok(session.get::<Hub>(HUB).await?.unwrap_or_else(Hub::seeded))
}

pub async fn store_hub(session: &Session, hub: &Hub) -> AppResult<()> {
    session.insert(HUB, hub).await?;
    Ok(())
}

pub async fn flash(session: &Session, msg: impl Into<String>) -> AppResult<()> {
    session.insert(FLASH, msg.into()).await?;
    Ok(())
}

pub async fn take_flash(session: &Session) -> AppResult<Option<String>> {
    Ok(session.remove::<String>(FLASH).await?)
}
