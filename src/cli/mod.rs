//! # CLI Module
//!
//! User-facing entry points dispatched from `main`:
//!
//! - [`serve`] - runs the OAuth front door HTTP server
//! - [`top_tracks`] - app-only catalog lookup: resolves an artist by name
//!   via the Client Credentials grant and prints their top tracks
//!
//! Each command loads configuration, delegates to the server or the Spotify
//! integration layer, and presents results or errors on the terminal.

mod serve;
mod tracks;

pub use serve::serve;
pub use tracks::top_tracks;
