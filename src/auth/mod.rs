mod login;
mod logout;

use axum::{routing::get, Router};

use crate::AppState;

pub(crate) use login::local_url;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login::login_page))
        .route("/login/{role}", get(login::login))
        .route("/logout", get(logout::logout))
}
