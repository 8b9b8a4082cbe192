//! Process-wide revoked-token store.
//!
//! Logout revokes the presented access token for the remainder of its
//! lifetime. The store is in-memory only and cleared on restart; tokens
//! outlive a restart only until their `exp` claim, which bounds the
//! exposure window.

use std::sync::Arc;

use dashmap::DashSet;

#[derive(Debug, Clone, Default)]
pub struct RevokedTokens {
    inner: Arc<DashSet<String>>,
}

impl RevokedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke a token. Idempotent.
    pub fn revoke(&self, token: &str) {
        self.inner.insert(token.to_string());
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.inner.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::RevokedTokens;

    #[test]
    fn revoke_is_idempotent() {
        let store = RevokedTokens::new();
        assert!(!store.is_revoked("tok-a"));

        store.revoke("tok-a");
        store.revoke("tok-a");
        assert!(store.is_revoked("tok-a"));
        assert!(!store.is_revoked("tok-b"));
    }
}
