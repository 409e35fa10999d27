// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Operator credentials for the Workspace ONE UEM API
//!
//! Three values are needed to talk to UEM: the API user name, its password,
//! and the tenant API key (sent as `aw-tenant-code`). They live in the OS
//! secure store under the service name [`SERVICE_NAME`], one entry per value.
//!
//! Callers should depend on the [`CredentialStore`] trait, not on a concrete
//! backend:
//!
//! ```ignore
//! use hub_credentials::{CredentialStore, Credentials, KeyringStore};
//!
//! let store = KeyringStore::default();
//! store.save(&Credentials::new("api-user", "s3cret", "TENANTKEY"))?;
//! let creds = store.load()?.expect("just saved");
//! ```

mod error;
mod keyring_store;
mod memory;

pub use error::CredentialError;
pub use keyring_store::KeyringStore;
pub use memory::MemoryStore;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Keychain service under which all entries are stored
pub const SERVICE_NAME: &str = "ch.epfl.reinstallhub";

/// Environment variable overriding the stored API user name
pub const ENV_USERNAME: &str = "REINSTALLHUB_USERNAME";
/// Environment variable overriding the stored API password
pub const ENV_PASSWORD: &str = "REINSTALLHUB_PASSWORD";
/// Environment variable overriding the stored tenant API key
pub const ENV_API_KEY: &str = "REINSTALLHUB_API_KEY";

/// The individual entries kept in the secure store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    Username,
    Password,
    ApiKey,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 3] = [Self::Username, Self::Password, Self::ApiKey];

    /// Account name of the keychain entry
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "WorkspaceOneAPIUsername",
            Self::Password => "WorkspaceOneAPIPassword",
            Self::ApiKey => "WorkspaceOneAPIKey",
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete set of UEM API credentials
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    pub api_key: SecretString,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Build credentials from `REINSTALLHUB_USERNAME`, `REINSTALLHUB_PASSWORD`
    /// and `REINSTALLHUB_API_KEY`.
    ///
    /// Returns `None` unless all three are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Credentials::from_env`] with a caller-supplied lookup
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Some(Self::new(
            get(ENV_USERNAME)?,
            get(ENV_PASSWORD)?,
            get(ENV_API_KEY)?,
        ))
    }

    /// Value of the `Authorization` header for HTTP Basic authentication
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }

    /// Tenant API key, for the `aw-tenant-code` header
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn value(&self, key: CredentialKey) -> &str {
        match key {
            CredentialKey::Username => &self.username,
            CredentialKey::Password => self.password.expose_secret(),
            CredentialKey::ApiKey => self.api_key.expose_secret(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Secure storage for the operator's UEM credentials.
///
/// Backends implement the three single-entry primitives; the whole-set
/// operations are provided on top of them.
pub trait CredentialStore: Send + Sync {
    fn set_entry(&self, key: CredentialKey, value: &str) -> Result<(), CredentialError>;

    /// `Ok(None)` when the entry does not exist
    fn get_entry(&self, key: CredentialKey) -> Result<Option<String>, CredentialError>;

    /// Deleting a missing entry is not an error
    fn delete_entry(&self, key: CredentialKey) -> Result<(), CredentialError>;

    /// Store all three values
    fn save(&self, credentials: &Credentials) -> Result<(), CredentialError> {
        if let Some(key) = CredentialKey::ALL
            .into_iter()
            .find(|k| credentials.value(*k).is_empty())
        {
            return Err(CredentialError::InvalidSecret(format!("{} is empty", key)));
        }
        for key in CredentialKey::ALL {
            self.set_entry(key, credentials.value(key))?;
        }
        tracing::debug!(username = %credentials.username, "saved credentials");
        Ok(())
    }

    /// Load the stored credentials.
    ///
    /// A partial set counts as "not configured" and yields `Ok(None)`.
    fn load(&self) -> Result<Option<Credentials>, CredentialError> {
        let username = self.get_entry(CredentialKey::Username)?;
        let password = self.get_entry(CredentialKey::Password)?;
        let api_key = self.get_entry(CredentialKey::ApiKey)?;

        match (username, password, api_key) {
            (Some(u), Some(p), Some(k)) => Ok(Some(Credentials::new(u, p, k))),
            _ => {
                tracing::debug!("credential set incomplete or absent");
                Ok(None)
            }
        }
    }

    /// Remove every stored entry
    fn clear(&self) -> Result<(), CredentialError> {
        for key in CredentialKey::ALL {
            self.delete_entry(key)?;
        }
        Ok(())
    }
}

/// Resolve credentials, preferring the environment over the store
pub fn resolve(store: &dyn CredentialStore) -> Result<Option<Credentials>, CredentialError> {
    if let Some(creds) = Credentials::from_env() {
        tracing::debug!("using credentials from environment");
        return Ok(Some(creds));
    }
    store.load()
}
