//! Session validation port for bearer token validation.
//!
//! This port defines the contract for validating access tokens and extracting
//! the caller's identity. HTTP middleware depends on it; the booking rules
//! never see a token.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::SessionNotFound` for well-formed tokens without a session
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token and return the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
