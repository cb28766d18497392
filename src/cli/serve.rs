use std::sync::Arc;

use crate::{
    config::{Config, SessionMode},
    error, info, server,
    server::AppState,
};

/// Starts the OAuth front door.
///
/// Configuration comes from the environment; the optional arguments are
/// command-line overrides for the bind port and session mode.
pub async fn serve(port: Option<u16>, session_mode: Option<SessionMode>) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    if let Some(port) = port {
        config.port = port;
    }
    if let Some(mode) = session_mode {
        config.session_mode = mode;
    }

    info!("Session mode: {}", config.session_mode);
    match &config.frontend_origin {
        Some(origin) => info!("Allowing credentialed requests from {}", origin),
        None => info!("No frontend origin configured, CORS disabled"),
    }

    let state = Arc::new(AppState::new(config));
    if let Err(e) = server::start_api_server(state).await {
        error!("Server failed: {}", e);
    }
}
