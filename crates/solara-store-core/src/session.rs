//! Session management
//!
//! Issues, stores, and validates the opaque tokens that bind a request to an
//! authenticated user. Sessions are process-wide in-memory state: empty on
//! startup, never expired, gone on restart.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

use solara_types::UserId;

use crate::credentials::CredentialStore;
use crate::error::AuthError;
use crate::token::TokenGenerator;

/// Server-side record binding an opaque token to a user identity
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Opaque 16-character token handed to the client at login
    pub token: String,
    /// Identity of the authenticated user
    pub user_id: UserId,
    /// Issuance timestamp (bookkeeping only; sessions never expire)
    pub created_at: DateTime<Utc>,
}

/// Session manager handles credential checking, token issuance, and token
/// validation
///
/// Repeated logins for the same user create additional independent sessions;
/// nothing is deduplicated or revoked.
pub struct SessionManager<U: CredentialStore> {
    credentials: Arc<U>,
    sessions: DashMap<String, Session>,
    token_gen: Box<dyn TokenGenerator>,
}

impl<U: CredentialStore> SessionManager<U> {
    /// Create a new session manager with an empty session set
    pub fn new(credentials: Arc<U>, token_gen: impl TokenGenerator + 'static) -> Self {
        Self {
            credentials,
            sessions: DashMap::new(),
            token_gen: Box::new(token_gen),
        }
    }

    /// Authenticate an email/password pair and issue a fresh session
    ///
    /// A missing (or empty) field is a malformed request, distinct from a
    /// wrong value. Unknown email and wrong password are collapsed into one
    /// error so callers cannot probe which field was wrong.
    pub fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Session, AuthError> {
        let (email, password) = match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(AuthError::MissingCredentials),
        };

        let user = self
            .credentials
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        if user.password != password {
            tracing::debug!("password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            token: self.fresh_token(),
            user_id: user.user_id(),
            created_at: Utc::now(),
        };
        self.sessions.insert(session.token.clone(), session.clone());

        tracing::debug!(user_id = %session.user_id, "session created");
        Ok(session)
    }

    /// Validate a token against the active-session set
    ///
    /// Idempotent: repeated calls with the same token never change state.
    pub fn validate(&self, token: Option<&str>) -> Result<Session, AuthError> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AuthError::MissingToken),
        };

        self.sessions
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                tracing::debug!("unknown session token");
                AuthError::InvalidToken
            })
    }

    /// Number of active sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Draw candidate tokens until one is distinct from every active token
    fn fresh_token(&self) -> String {
        loop {
            let token = self.token_gen.generate();
            if !self.sessions.contains_key(&token) {
                return token;
            }
        }
    }
}

impl<U: CredentialStore> std::fmt::Debug for SessionManager<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}
