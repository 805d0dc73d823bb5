//! Credential store
//!
//! Read-only mapping from email to password and user identity, loaded from
//! the seeded users fixture at startup.

use std::collections::HashMap;
use std::path::Path;

use solara_types::UserRecord;

use crate::error::DataError;

/// Read-only credential lookup
pub trait CredentialStore: Send + Sync {
    /// Find a user record by exact email match
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
}

/// In-memory credential store backed by the users fixture
#[derive(Debug, Default)]
pub struct InMemoryCredentials {
    by_email: HashMap<String, UserRecord>,
}

impl InMemoryCredentials {
    /// Build a store from user records
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let by_email = records
            .into_iter()
            .map(|record| (record.email.clone(), record))
            .collect();
        Self { by_email }
    }

    /// Load a store from a JSON fixture file (array of user records)
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<UserRecord> = serde_json::from_str(&raw)?;
        Ok(Self::from_records(records))
    }

    /// Number of loaded users
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}

impl CredentialStore for InMemoryCredentials {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.by_email.get(email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, email: &str, password: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            name: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_find_by_exact_email() {
        let store = InMemoryCredentials::from_records(vec![record(
            "yellowleopard753",
            "susanna.richards@example.com",
            "jonjon",
        )]);

        let user = store.find_by_email("susanna.richards@example.com").unwrap();
        assert_eq!(user.username, "yellowleopard753");
        assert_eq!(user.password, "jonjon");

        // Near-miss emails do not match
        assert!(store.find_by_email("s.richards@example.com").is_none());
        assert!(store.find_by_email("SUSANNA.RICHARDS@EXAMPLE.COM").is_none());
    }

    #[test]
    fn test_from_json() {
        let raw = r#"[
            {
                "username": "lazywolf342",
                "name": "Salvador Jordan",
                "email": "salvador.jordan@example.com",
                "password": "tucker"
            }
        ]"#;
        let records: Vec<UserRecord> = serde_json::from_str(raw).unwrap();
        let store = InMemoryCredentials::from_records(records);
        assert_eq!(store.len(), 1);
        assert!(store.find_by_email("salvador.jordan@example.com").is_some());
    }
}
