//! Persisted session credentials.
//!
//! Three independent entries are kept under fixed keys: the access token, the
//! refresh token and the JSON-serialized [`User`]. Authentication is derived
//! from token presence alone; nothing here inspects the token.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::types::{TokenBundle, User};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Typed view over a [`KeyValueStore`] holding one session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying key-value handle.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Store the access token as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the write.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(ACCESS_TOKEN_KEY, token)
    }

    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the write.
    pub fn set_refresh_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(REFRESH_TOKEN_KEY, token)
    }

    /// Serialize and store the user record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the backend rejects the write.
    pub fn set_user(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Write(e.to_string()))?;
        self.storage.set(USER_KEY, &raw)
    }

    /// Persist a full token bundle: access token, refresh token, then user.
    ///
    /// A bundle without a refresh token clears any stale one.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn persist(&self, bundle: &TokenBundle) -> Result<(), StorageError> {
        self.set_token(&bundle.access_token)?;
        match &bundle.refresh_token {
            Some(refresh) => self.set_refresh_token(refresh)?,
            None => self.storage.remove_all(&[REFRESH_TOKEN_KEY])?,
        }
        self.set_user(&bundle.user)
    }

    /// Stored user, or `None` when absent, unreadable or malformed.
    pub fn user(&self) -> Option<User> {
        match self.try_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored user");
                None
            }
        }
    }

    /// Stored user with decode failures reported instead of swallowed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Malformed`] if the stored JSON does not parse,
    /// or the backend error if storage is unreachable.
    pub fn try_user(&self) -> Result<Option<User>, StorageError> {
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Malformed { key: USER_KEY.to_owned(), reason: e.to_string() })
    }

    /// Raw stored access token.
    pub fn token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// True iff an access token is stored, regardless of the user entry.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Delete token, refresh token and user in one storage operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove_all(&SESSION_KEYS)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "session storage read failed");
                None
            }
        }
    }
}
