//! Session store port.
//!
//! A signed token alone is not enough to authenticate: the token must also
//! belong to a session that is still on record. Signing out deletes the row
//! and revokes the token.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Lookup of issued sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns true if `token` is recorded as an active session of `user_id`.
    async fn is_active(&self, token: &str, user_id: &UserId) -> Result<bool, DomainError>;
}
