//! # Spotify Integration Module
//!
//! The integration layer between Tunegate and the Spotify Web API. It covers
//! the two token flows and the resource lookups the service exposes:
//!
//! - [`auth`] - OAuth 2.0 token exchange: the Authorization Code grant for
//!   interactive login and the Client Credentials grant for app-only catalog
//!   queries.
//! - [`user`] - User-scoped resources: the current profile (`/me`) and the
//!   recently played tracks (`/me/player/recently-played`).
//! - [`artists`] - Catalog resources: artist search and top tracks.
//!
//! All resource requests authenticate with `Authorization: Bearer <token>`.
//! Calls are plain blocking-style async request/response with no retries,
//! timeouts or caching; a failed recently-played lookup degrades to an empty
//! result instead of failing the enclosing request, so the front door never
//! crashes on a downstream error.

pub mod artists;
pub mod auth;
pub mod user;
