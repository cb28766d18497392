#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use tunegate::{
    config::{Config, DEFAULT_SCOPE, SessionMode},
    server::{self, AppState},
};

/// In-process stand-in for Spotify's authorization and resource servers.
pub struct SpotifyStub {
    pub token_hits: AtomicUsize,
    pub token_response: Value,
    pub token_auth_header: Mutex<Option<String>>,
    pub recently_played_status: StatusCode,
    pub search_empty: bool,
}

impl SpotifyStub {
    pub fn ok() -> Self {
        SpotifyStub {
            token_hits: AtomicUsize::new(0),
            token_response: json!({
                "access_token": "abc",
                "token_type": "Bearer",
                "scope": DEFAULT_SCOPE,
                "expires_in": 3600,
            }),
            token_auth_header: Mutex::new(None),
            recently_played_status: StatusCode::OK,
            search_empty: false,
        }
    }

    pub fn with_token_response(mut self, response: Value) -> Self {
        self.token_response = response;
        self
    }

    pub fn with_recently_played_status(mut self, status: StatusCode) -> Self {
        self.recently_played_status = status;
        self
    }

    pub fn with_empty_search(mut self) -> Self {
        self.search_empty = true;
        self
    }
}

async fn token(Extension(stub): Extension<Arc<SpotifyStub>>, headers: HeaderMap) -> Json<Value> {
    stub.token_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        *stub.token_auth_header.lock().unwrap() = Some(auth.to_string());
    }
    Json(stub.token_response.clone())
}

async fn me() -> Json<Value> {
    Json(json!({
        "id": "listener-1",
        "display_name": "Test Listener",
        "email": "listener@example.com",
    }))
}

async fn recently_played(Extension(stub): Extension<Arc<SpotifyStub>>) -> Response {
    if stub.recently_played_status != StatusCode::OK {
        return (stub.recently_played_status, "").into_response();
    }

    Json(json!({
        "items": [
            { "track": { "name": "Imaginal Disk", "artists": [{ "name": "Magdalena Bay" }] } }
        ]
    }))
    .into_response()
}

async fn search(
    Extension(stub): Extension<Arc<SpotifyStub>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    if stub.search_empty {
        return Json(json!({ "artists": { "items": [] } }));
    }

    // Echoes the query back as the single match.
    let name = params.get("q").cloned().unwrap_or_default();
    Json(json!({
        "artists": {
            "items": [{ "id": "artist-1", "name": name, "genres": ["pop"] }]
        }
    }))
}

async fn top_tracks(Path(_artist_id): Path<String>) -> Json<Value> {
    Json(json!({
        "tracks": [
            { "name": "Image", "artists": [{ "name": "Magdalena Bay" }] },
            { "name": "Death & Romance", "artists": [{ "name": "Magdalena Bay" }] }
        ]
    }))
}

pub async fn spawn_stub(stub: Arc<SpotifyStub>) -> SocketAddr {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me", get(me))
        .route("/v1/me/player/recently-played", get(recently_played))
        .route("/v1/search", get(search))
        .route("/v1/artists/{id}/top-tracks", get(top_tracks))
        .layer(Extension(stub));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn test_config(stub_addr: SocketAddr, session_mode: SessionMode) -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:3000/callback".to_string(),
        frontend_origin: Some("http://localhost:5173".to_string()),
        scope: DEFAULT_SCOPE.to_string(),
        session_mode,
        session_cookie: "tunegate_session".to_string(),
        port: 0,
        auth_url: format!("http://{stub_addr}/authorize"),
        token_url: format!("http://{stub_addr}/api/token"),
        api_url: format!("http://{stub_addr}/v1"),
        expose_upstream_errors: true,
    }
}

/// Starts the service under test on an ephemeral port.
pub async fn spawn_app(config: Config) -> SocketAddr {
    let state = Arc::new(AppState::new(config));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve(listener, state).await.unwrap();
    });

    addr
}

/// HTTP client with redirects disabled so 302 responses can be inspected.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
