// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! First-run setup: tenant settings plus keychain credentials

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Input;
use hub_credentials::{CredentialStore, Credentials, ENV_API_KEY, ENV_PASSWORD};
use std::io::IsTerminal;
use std::path::Path;

use crate::config::{Settings, SettingsOverrides, validate_url};

#[derive(Args, Clone)]
pub struct ConfigureArgs {
    /// UEM API user name
    #[arg(long, env = "REINSTALLHUB_USERNAME")]
    pub username: Option<String>,
}

pub fn run(
    args: ConfigureArgs,
    overrides: &SettingsOverrides,
    store: &dyn CredentialStore,
    config_file: &Path,
) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    configure(
        &args,
        overrides,
        store,
        config_file,
        interactive,
        |name| std::env::var(name).ok(),
    )
}

fn configure<F>(
    args: &ConfigureArgs,
    overrides: &SettingsOverrides,
    store: &dyn CredentialStore,
    config_file: &Path,
    interactive: bool,
    env: F,
) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let stored = Settings::load(config_file)?.unwrap_or_default();

    let url = field(
        overrides.url.as_deref(),
        &stored.url,
        "UEM tenant URL",
        interactive,
    )?;
    validate_url(&url)?;
    let app_id = field(
        overrides.app_id.as_deref(),
        &stored.app_id,
        "Hub internal app ID",
        interactive,
    )?;
    let tag_id = field(
        overrides.tag_id.as_deref(),
        &stored.tag_id,
        "Missing-Hub tag ID",
        interactive,
    )?;
    let username = field(args.username.as_deref(), "", "API user name", interactive)?;
    let password = secret(env(ENV_PASSWORD), ENV_PASSWORD, "API password", interactive)?;
    let api_key = secret(env(ENV_API_KEY), ENV_API_KEY, "Tenant API key", interactive)?;

    store
        .save(&Credentials::new(username.clone(), password, api_key))
        .context("Failed to store credentials in the keychain")?;
    println!("Stored credentials for '{}' in the keychain", username);

    Settings::new(url.trim_end_matches('/').to_string(), app_id, tag_id).save(config_file)?;
    println!("Saved settings to {}", config_file.display());

    Ok(())
}

/// Use the given value, or prompt with the stored one as default
fn field(given: Option<&str>, stored: &str, prompt: &str, interactive: bool) -> Result<String> {
    if let Some(value) = given.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }
    if !interactive {
        anyhow::bail!("{} is required", prompt);
    }

    let mut input = Input::<String>::new().with_prompt(prompt);
    if !stored.is_empty() {
        input = input.default(stored.to_string());
    }
    let value = input.interact_text()?;
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", prompt);
    }
    Ok(value.to_string())
}

fn secret(given: Option<String>, var: &str, prompt: &str, interactive: bool) -> Result<String> {
    if let Some(value) = given.filter(|v| !v.is_empty()) {
        return Ok(value);
    }
    if !interactive {
        anyhow::bail!("{} is required; set {}", prompt, var);
    }

    let value = rpassword::prompt_password(format!("{}: ", prompt))?;
    if value.is_empty() {
        anyhow::bail!("{} cannot be empty", prompt);
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hub_credentials::{CredentialKey, MemoryStore};
    use pretty_assertions::assert_eq;

    fn secrets(name: &str) -> Option<String> {
        match name {
            ENV_PASSWORD => Some("s3cret".to_string()),
            ENV_API_KEY => Some("TENANTKEY".to_string()),
            _ => None,
        }
    }

    fn overrides() -> SettingsOverrides {
        SettingsOverrides {
            url: Some("https://as1234.awmdm.com/".to_string()),
            app_id: Some("311".to_string()),
            tag_id: Some("10042".to_string()),
        }
    }

    fn args() -> ConfigureArgs {
        ConfigureArgs {
            username: Some("api-user".to_string()),
        }
    }

    #[test]
    fn test_configure_writes_settings_and_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.json");
        let store = MemoryStore::new();

        configure(&args(), &overrides(), &store, &config_file, false, secrets).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&config_file).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({
                "url": "https://as1234.awmdm.com",
                "appId": "311",
                "tagId": "10042"
            })
        );

        let entry = |key| store.get_entry(key).unwrap();
        assert_eq!(entry(CredentialKey::Username).as_deref(), Some("api-user"));
        assert_eq!(entry(CredentialKey::Password).as_deref(), Some("s3cret"));
        assert_eq!(entry(CredentialKey::ApiKey).as_deref(), Some("TENANTKEY"));
    }

    #[test]
    fn test_configure_keeps_stored_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.json");
        Settings::new(
            "https://stored.awmdm.com".to_string(),
            "12".to_string(),
            "34".to_string(),
        )
        .save(&config_file)
        .unwrap();
        let store = MemoryStore::new();

        // Non-interactive runs need every value, so only the tag is replaced
        let overrides = SettingsOverrides {
            url: Some("https://stored.awmdm.com".to_string()),
            app_id: Some("12".to_string()),
            tag_id: Some("99".to_string()),
        };
        configure(&args(), &overrides, &store, &config_file, false, secrets).unwrap();

        let settings = Settings::load(&config_file).unwrap().unwrap();
        assert_eq!(settings.tag_id, "99");
        assert_eq!(settings.app_id, "12");
    }

    #[test]
    fn test_configure_missing_secret_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.json");
        let store = MemoryStore::new();

        let err = configure(&args(), &overrides(), &store, &config_file, false, |_| None)
            .unwrap_err();

        assert!(err.to_string().contains(ENV_PASSWORD));
        assert!(!config_file.exists());
        assert!(store.load().unwrap().is_none());
    }
}
