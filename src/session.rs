//! Server-side session store.
//!
//! A single-slot-per-client token store: each session id maps to exactly one
//! access token. Sessions live in process memory and disappear on restart;
//! there is no persistence and no cross-user sharing. In stateless mode the
//! store is never written to.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{types::Token, utils};

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Token>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a token under a freshly generated session id and returns the id.
    pub async fn put(&self, token: Token) -> String {
        let session_id = utils::generate_session_id();
        let mut sessions = self.inner.lock().await;
        sessions.insert(session_id.clone(), token);
        session_id
    }

    pub async fn get(&self, session_id: &str) -> Option<Token> {
        let sessions = self.inner.lock().await;
        sessions.get(session_id).cloned()
    }

    /// Drops a session, returning the token that was stored under it.
    pub async fn remove(&self, session_id: &str) -> Option<Token> {
        let mut sessions = self.inner.lock().await;
        sessions.remove(session_id)
    }
}
