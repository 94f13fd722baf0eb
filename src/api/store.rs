//! Session token storage.
//!
//! The client never reads ambient global state: it is handed a `TokenStore`
//! and consults it before every request. `KeychainTokenStore` persists the
//! token in the OS credential store so it survives restarts;
//! `MemoryTokenStore` keeps it for the lifetime of the process.

use std::sync::RwLock;

use keyring::Entry;
use thiserror::Error;

/// Keychain service name for the InstaLite client.
const SERVICE_NAME: &str = "com.instalite.client";

/// Fixed key the session token is stored under.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Keychain operation failed: {0}")]
    Keychain(String),
    #[error("Token store lock poisoned")]
    Poisoned,
}

impl From<keyring::Error> for TokenStoreError {
    fn from(err: keyring::Error) -> Self {
        TokenStoreError::Keychain(err.to_string())
    }
}

/// Persistent key-value slot holding the opaque session token.
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Replace the stored token.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        let guard = self.token.read().map_err(|_| TokenStoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut guard = self.token.write().map_err(|_| TokenStoreError::Poisoned)?;
        *guard = Some(token.to_string());
        Ok(())
    }
}

/// Token store backed by the OS keychain.
#[derive(Debug, Clone)]
pub struct KeychainTokenStore {
    service: String,
}

impl KeychainTokenStore {
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    /// Use a custom keychain service name, e.g. to keep sessions for
    /// different backends apart.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<Entry, TokenStoreError> {
        Ok(Entry::new(&self.service, TOKEN_KEY)?)
    }
}

impl Default for KeychainTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeychainTokenStore {
    /// Returns `None` if no entry exists (user never logged in).
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(TokenStoreError::from(e)),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        self.entry()?.set_password(token)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_memory_store_save_overwrites() {
        let store = MemoryTokenStore::with_token("old");
        assert_eq!(store.load().unwrap().as_deref(), Some("old"));

        store.save("new").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
    }
}
