use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    api,
    config::{Config, SessionMode},
    error::{ApiError, AuthError},
    server::AppState,
    spotify,
    types::{Track, UserProfile},
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    jar: CookieJar,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let Some(code) = params.get("code") else {
        return Err(ApiError::MissingCode);
    };

    let token = spotify::auth::exchange_code(code, &state.config)
        .await
        .map_err(|err| exchange_error(err, &state.config))?;

    match state.config.session_mode {
        SessionMode::Stateless => {
            // The token never outlives this handler.
            let user = spotify::user::get_current_user(&token.access_token, &state.config).await?;
            let recently_played =
                spotify::user::get_recently_played(&token.access_token, &state.config).await;

            Ok(Html(render_welcome(&user, &recently_played)).into_response())
        }
        SessionMode::ServerSession => {
            let session_id = state.sessions.put(token).await;
            let cookie = Cookie::build((state.config.session_cookie.clone(), session_id))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            let jar = jar.add(cookie);

            let destination = state
                .config
                .frontend_origin
                .clone()
                .unwrap_or_else(|| "/api/user".to_string());

            Ok((jar, api::found(&destination)).into_response())
        }
    }
}

fn exchange_error(err: AuthError, config: &Config) -> ApiError {
    match err {
        AuthError::TokenExchange { body, .. } => ApiError::TokenExchange {
            detail: if config.expose_upstream_errors {
                body
            } else {
                "authorization server rejected the exchange".to_string()
            },
        },
        AuthError::Transport(err) => ApiError::Downstream(err),
    }
}

fn render_welcome(user: &UserProfile, recently_played: &[Track]) -> String {
    let mut html = format!("<h1>Welcome, {}</h1>", user.display_name);
    html.push_str(&format!(
        "<p>Email: {}</p>",
        user.email.as_deref().unwrap_or("-")
    ));

    if recently_played.is_empty() {
        html.push_str("<h2>No recently played tracks found.</h2>");
    } else {
        html.push_str("<h2>Recently Played Tracks:</h2><ul>");
        for track in recently_played {
            html.push_str(&format!(
                "<li>{} by {}</li>",
                track.name,
                track.artist_names()
            ));
        }
        html.push_str("</ul>");
    }

    html
}
