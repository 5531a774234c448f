//! Stored session credentials.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared holder of the bearer token sent with every API call.
///
/// Clones share the same token, so invalidating it from the client (on a
/// `401`) is visible to the session-management layer that set it.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    /// Store a new token, replacing any previous one.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Discard the stored token.
    ///
    /// Returns `true` if a token was present.
    pub fn invalidate(&self) -> bool {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }
}
