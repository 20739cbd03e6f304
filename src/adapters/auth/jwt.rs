//! Bearer token validation against issued sessions.
//!
//! Tokens are HS256 JWTs carrying a `userId` claim, signed with the shared
//! secret at sign-in. A token is accepted only when:
//!
//! 1. Its signature verifies against the configured secret
//! 2. It has not expired (when it carries `exp`)
//! 3. Its `userId` is a valid user id
//! 4. A session row for exactly this token and user still exists
//!
//! The last check lets signing out revoke a token before it expires.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionStore, SessionValidator};

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(rename = "userId")]
    user_id: i32,

    /// Expiry timestamp (Unix epoch seconds); tokens without it never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<u64>,
}

/// `SessionValidator` backed by a shared-secret JWT and a session store.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionStore>,
}

impl JwtSessionValidator {
    pub fn new(secret: &SecretString, sessions: Arc<dyn SessionStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.user_id).map_err(|_| {
            tracing::warn!("Invalid user id in token: {}", claims.user_id);
            AuthError::InvalidToken
        })?;

        let active = self
            .sessions
            .is_active(token, &user_id)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if !active {
            return Err(AuthError::SessionNotFound);
        }

        Ok(AuthenticatedUser::new(user_id))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}
