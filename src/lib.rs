//! Tunegate — Spotify OAuth login backend
//!
//! This library implements a small glue service around the Spotify Web API:
//! it drives the OAuth 2.0 Authorization Code flow, holds the resulting
//! access token for a login session and serves the user's profile and
//! recently played tracks.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers for the front door
//! - `cli` - Command-line entry points (serve, catalog lookups)
//! - `config` - Immutable process configuration loaded from the environment
//! - `error` - Error taxonomy and HTTP response mapping
//! - `server` - Axum server setup and routing
//! - `session` - Single-slot-per-client token store
//! - `spotify` - Token exchange and resource clients for the Spotify Web API
//! - `types` - Data structures and type definitions
//! - `utils` - Session id generation and auth header helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by top-level glue where the concrete error type does not matter;
/// request-scoped failures use the structured types in [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures (bad configuration, bind
/// errors). Request-scoped failures never use this macro.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, notably downstream resource failures that
/// degrade to an empty result instead of failing the request.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
