use std::sync::Arc;

use axum::{Extension, response::Response};

use crate::{api, error::ApiError, server::AppState, spotify};

pub async fn login(Extension(state): Extension<Arc<AppState>>) -> Result<Response, ApiError> {
    let auth_url = spotify::auth::authorize_url(&state.config)?;
    Ok(api::found(&auth_url))
}
