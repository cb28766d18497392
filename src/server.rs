use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{Res, api, config::Config, info, session::SessionStore};

/// Shared state behind every route handler. The config is read-only after
/// startup; the session store is the only thing written to concurrently.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            sessions: SessionStore::new(),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Res<Router> {
    let mut app = Router::new()
        .route("/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/api/user", get(api::current_user))
        .route("/logout", get(api::logout))
        .route("/health", get(api::health))
        .layer(Extension(Arc::clone(&state)));

    // Credentialed cross-origin access is restricted to the single trusted
    // frontend origin; without one configured there is no CORS at all.
    if let Some(origin) = &state.config.frontend_origin {
        let origin = origin.parse::<HeaderValue>()?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_credentials(true)
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    Ok(app)
}

/// Serves the front door on an already-bound listener.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Res<()> {
    let app = build_router(state)?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn start_api_server(state: Arc<AppState>) -> Res<()> {
    let addr = state.config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    serve(listener, state).await
}
