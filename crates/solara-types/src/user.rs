//! User types

use serde::{Deserialize, Serialize};

/// Unique user identifier (the fixture username)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user id from a username
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A credential-store record
///
/// Read-only after load; the password is a plain fixture value, matching the
/// seeded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Username, doubles as the stable user id
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// The user's identity
    pub fn user_id(&self) -> UserId {
        UserId::new(self.username.clone())
    }
}
