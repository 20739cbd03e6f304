//! Authentication types for the domain layer.
//!
//! These types represent the caller identity established by the
//! `SessionValidator` port. The booking rules only ever need the user id,
//! so that is all an `AuthenticatedUser` carries.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier carried by the token.
    pub id: UserId,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token is well-formed but no active session exists for it.
    #[error("No active session for token")]
    SessionNotFound,

    /// The session store is unavailable (network, database, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_new_creates_user() {
        let user = AuthenticatedUser::new(UserId::new(12).unwrap());
        assert_eq!(user.id.as_i32(), 12);
    }

    #[test]
    fn auth_error_session_not_found_displays_correctly() {
        assert_eq!(
            format!("{}", AuthError::SessionNotFound),
            "No active session for token"
        );
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(format!("{}", err), "Auth service unavailable: Connection refused");
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::SessionNotFound.is_transient());
    }
}
