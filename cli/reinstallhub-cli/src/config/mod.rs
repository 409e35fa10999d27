// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod settings;

pub use settings::Settings;

use anyhow::Result;

/// Per-invocation overrides from CLI flags or REINSTALLHUB_* variables
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub url: Option<String>,
    pub app_id: Option<String>,
    pub tag_id: Option<String>,
}

/// Resolve the effective settings
///
/// Priority per field:
/// 1. CLI argument / environment variable (clap handles both)
/// 2. config.json
pub fn resolve_settings(overrides: &SettingsOverrides) -> Result<Settings> {
    let stored = Settings::load(&paths::config_file())?.unwrap_or_default();
    let settings = merge(overrides, stored);

    let missing = |field: &str, flag: &str, var: &str| {
        anyhow::anyhow!(
            "No {} configured. Run 'reinstallhub configure', pass {} or set {}",
            field,
            flag,
            var
        )
    };
    if settings.url.is_empty() {
        return Err(missing("tenant URL", "--url", "REINSTALLHUB_URL"));
    }
    if settings.app_id.is_empty() {
        return Err(missing("app ID", "--app-id", "REINSTALLHUB_APP_ID"));
    }
    if settings.tag_id.is_empty() {
        return Err(missing("tag ID", "--tag-id", "REINSTALLHUB_TAG_ID"));
    }

    validate_url(&settings.url)?;
    Ok(settings)
}

/// Overlay non-empty overrides on top of stored settings
pub fn merge(overrides: &SettingsOverrides, stored: Settings) -> Settings {
    let pick = |o: &Option<String>, s: String| {
        o.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or(s)
    };
    Settings {
        url: pick(&overrides.url, stored.url),
        app_id: pick(&overrides.app_id, stored.app_id),
        tag_id: pick(&overrides.tag_id, stored.tag_id),
    }
}

/// Check that a tenant URL is an absolute http(s) URL
pub fn validate_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| anyhow::anyhow!("Invalid tenant URL '{}': {}", raw, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow::anyhow!(
            "Invalid tenant URL '{}': scheme must be http or https, not '{}'",
            raw,
            other
        )),
    }
}
