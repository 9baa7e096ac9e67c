//! Shared authentication session.
//!
//! Holds the bearer token issued at sign-in. The API client reads it for
//! authenticated endpoints; the host checks it to skip the login flow when
//! a session already exists.

use parking_lot::RwLock;
use std::sync::Arc;

/// Process-wide authentication state.
///
/// Cloning is cheap; all clones share the same token cell.
#[derive(Clone, Default)]
pub struct AuthSession {
    token: Arc<RwLock<Option<String>>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the token issued by a successful sign-in.
    pub fn store_token(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    /// The current bearer token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// True once a token has been stored.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Forget the stored token.
    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn store_token_authenticates() {
        let session = AuthSession::new();
        session.store_token("tok-123");
        assert!(session.is_authenticated());
        assert_eq!(session.bearer(), Some("tok-123".to_string()));
    }

    #[test]
    fn clear_forgets_token() {
        let session = AuthSession::new();
        session.store_token("tok-123");
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let session = AuthSession::new();
        let clone = session.clone();
        session.store_token("tok-456");
        assert!(clone.is_authenticated());
    }
}
