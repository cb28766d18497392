//! # API Module
//!
//! HTTP route handlers for the front door. The handlers are pure glue: they
//! build the authorization redirect, drive the token exchange on the OAuth
//! callback, and shape profile plus recently-played data into HTML or JSON
//! depending on the configured session mode.
//!
//! - [`login`] - `GET /` begins the login flow with a 302 to Spotify
//! - [`callback`] - `GET /callback` OAuth2 redirect target
//! - [`current_user`] - `GET /api/user` JSON endpoint for session clients
//! - [`logout`] - `GET /logout` drops the server-side session
//! - [`health`] - `GET /health` liveness probe

mod callback;
mod health;
mod login;
mod user;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use user::{current_user, logout};

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Plain 302 redirect. Axum's `Redirect` helpers emit 303/307/308; the OAuth
/// contract here is the classic 302 Found.
pub(crate) fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
        (),
    )
        .into_response()
}
