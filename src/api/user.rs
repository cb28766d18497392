use std::sync::Arc;

use axum::{Extension, response::Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::{Value, json};

use crate::{error::ApiError, server::AppState, spotify, types::Token};

pub async fn current_user(
    jar: CookieJar,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let token = session_token(&jar, &state)
        .await
        .ok_or(ApiError::Unauthenticated)?;

    let user = spotify::user::get_current_user(&token.access_token, &state.config).await?;
    let recently_played =
        spotify::user::get_recently_played(&token.access_token, &state.config).await;

    Ok(Json(json!({
        "user": user,
        "recently_played": recently_played,
    })))
}

pub async fn logout(
    jar: CookieJar,
    Extension(state): Extension<Arc<AppState>>,
) -> (CookieJar, Json<Value>) {
    if let Some(cookie) = jar.get(&state.config.session_cookie) {
        state.sessions.remove(cookie.value()).await;
    }

    let jar = jar.remove(Cookie::build(state.config.session_cookie.clone()).path("/"));
    (jar, Json(json!({ "status": "logged out" })))
}

async fn session_token(jar: &CookieJar, state: &AppState) -> Option<Token> {
    let cookie = jar.get(&state.config.session_cookie)?;
    state.sessions.get(cookie.value()).await
}
