use axum::{
    debug_handler,
    extract::{Path, Query},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{hub::Role, include_res, res, session, AppResult};

#[derive(Deserialize)]
pub(crate) struct LoginQuery {
    pub(crate) return_url: Option<String>,
}

#[debug_handler]
pub(crate) async fn login_page(
    Query(LoginQuery { return_url }): Query<LoginQuery>,
    session: Session,
) -> AppResult<Response> {
    let hub = session::load_hub(&session).await?;
    if hub.role().is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let suffix = match return_url {
        Some(return_url) => format!("?return_url={}", res::escape_attr(&return_url)),
        None => String::new(),
    };

    Ok(Html(
        include_res!(str, "/pages/login.html")
            .replace("{return_suffix}", &suffix)
    ).into_response())
}

#[debug_handler]
pub(crate) async fn login(
    Path(role): Path<Role>,
    Query(LoginQuery { return_url }): Query<LoginQuery>,
    session: Session,
) -> AppResult<Redirect> {
    let mut hub = session::load_hub(&session).await?;
    hub.login(role);
    session::store_hub(&session, &hub).await?;

    Ok(Redirect::to(&local_url(return_url)))
}

/// Only same-site paths are followed after login or logout.
pub(crate) fn local_url(return_url: Option<String>) -> String {
    return_url
        .filter(|url| url.starts_with('/') && !url.starts_with("//"))
        .unwrap_or_else(|| "/".to_owned())
}
