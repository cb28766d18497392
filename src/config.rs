//! Configuration management for the Tunegate service.
//!
//! Configuration is read once at process start from environment variables
//! (optionally seeded from a `.env` file in the working directory) into an
//! immutable [`Config`] struct. Everything downstream receives the struct by
//! reference; nothing reads the environment after startup.

use std::{env, fmt, str::FromStr};

use crate::error::ConfigError;

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Scopes requested during the authorization redirect.
pub const DEFAULT_SCOPE: &str = "user-read-private user-read-email user-read-recently-played user-top-read user-read-playback-state";

const SESSION_COOKIE_DEFAULT: &str = "tunegate_session";

/// How the access token obtained on the OAuth callback is kept.
///
/// - `Stateless`: the token lives only inside the callback handler; the
///   response is rendered immediately and the token is dropped.
/// - `ServerSession`: the token is stored against a server-side session id
///   delivered to the client in a cookie, and a JSON endpoint serves the
///   user's data on subsequent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Stateless,
    ServerSession,
}

impl FromStr for SessionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stateless" => Ok(SessionMode::Stateless),
            "server-session" | "session" => Ok(SessionMode::ServerSession),
            other => Err(ConfigError::InvalidValue {
                name: "SESSION_MODE",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMode::Stateless => write!(f, "stateless"),
            SessionMode::ServerSession => write!(f, "server-session"),
        }
    }
}

/// Immutable process configuration.
///
/// The client secret is held here and in outbound token requests only; it
/// must never be written into a response body.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Must byte-for-byte match the redirect URI registered with Spotify.
    /// The same value is used to build the authorize URL and to exchange
    /// the authorization code; the token endpoint rejects any mismatch.
    pub redirect_uri: String,
    /// Trusted frontend origin. Enables CORS with credentials and is the
    /// post-login redirect target in server-session mode.
    pub frontend_origin: Option<String>,
    pub scope: String,
    pub session_mode: SessionMode,
    pub session_cookie: String,
    pub port: u16,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// Whether 400 responses from a failed token exchange carry the raw
    /// upstream error body. Useful as a developer tool, off for deployments
    /// that should not leak upstream payloads verbatim.
    pub expose_upstream_errors: bool,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are fine; real environment variables always win.
pub fn load_env() {
    dotenv::dotenv().ok();
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `CLIENT_ID`, `CLIENT_SECRET` and `REDIRECT_URI` are required.
    /// Everything else has a default: port 8080, stateless session mode, the
    /// public Spotify endpoints and the standard scope set. The endpoint
    /// URLs are overridable so tests can point the service at local stubs.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => 8080,
        };

        let session_mode = match env::var("SESSION_MODE") {
            Ok(raw) => raw.parse()?,
            Err(_) => SessionMode::Stateless,
        };

        let expose_upstream_errors = match env::var("EXPOSE_UPSTREAM_ERRORS") {
            Ok(raw) => raw != "0" && !raw.eq_ignore_ascii_case("false"),
            Err(_) => true,
        };

        Ok(Config {
            client_id: require("CLIENT_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            redirect_uri: require("REDIRECT_URI")?,
            frontend_origin: env::var("FRONTEND_ORIGIN").ok(),
            scope: env::var("SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            session_mode,
            session_cookie: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| SESSION_COOKIE_DEFAULT.to_string()),
            port,
            auth_url: env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
            token_url: env::var("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            expose_upstream_errors,
        })
    }

    /// Address the front door binds to.
    pub fn server_addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing { name })
}
