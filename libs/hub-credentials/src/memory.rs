// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Process-local credential store

use crate::{CredentialError, CredentialKey, CredentialStore};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory credential store, for tests and embedding callers
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<CredentialKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<CredentialKey, String>>, CredentialError> {
        self.entries
            .lock()
            .map_err(|_| CredentialError::Backend("memory store lock poisoned".to_string()))
    }
}

impl CredentialStore for MemoryStore {
    fn set_entry(&self, key: CredentialKey, value: &str) -> Result<(), CredentialError> {
        self.lock()?.insert(key, value.to_string());
        Ok(())
    }

    fn get_entry(&self, key: CredentialKey) -> Result<Option<String>, CredentialError> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn delete_entry(&self, key: CredentialKey) -> Result<(), CredentialError> {
        self.lock()?.remove(&key);
        Ok(())
    }
}
