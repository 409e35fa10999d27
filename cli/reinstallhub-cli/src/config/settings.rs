// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Non-secret tenant settings

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tenant settings persisted in config.json
///
/// Secrets never go here; they live in the OS keychain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// UEM tenant base URL (e.g. https://as1234.awmdm.com)
    #[serde(default)]
    pub url: String,

    /// Internal application id of the Hub installer
    #[serde(rename = "appId", default)]
    pub app_id: String,

    /// Tag id marking Macs with a missing Hub
    #[serde(rename = "tagId", default)]
    pub tag_id: String,
}

impl Settings {
    pub fn new(url: String, app_id: String, tag_id: String) -> Self {
        Self {
            url,
            app_id,
            tag_id,
        }
    }

    /// Load the settings file at `path`, `Ok(None)` if it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(Some(settings))
    }

    /// Save the settings file, creating its directory
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Delete the settings file; returns whether one existed
    pub fn delete(path: &Path) -> anyhow::Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(anyhow::anyhow!(
                "Failed to delete {}: {}",
                path.display(),
                e
            )),
        }
    }
}
