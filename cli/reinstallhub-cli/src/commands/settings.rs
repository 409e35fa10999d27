// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Config inspection commands

use anyhow::Result;
use clap::Subcommand;
use hub_credentials::{CredentialStore, Credentials};
use std::path::Path;

use crate::config::{Settings, SettingsOverrides, merge};
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    /// Show effective settings and where credentials come from
    Show,
}

impl ConfigCommand {
    pub fn run(
        &self,
        overrides: &SettingsOverrides,
        store: &dyn CredentialStore,
        config_file: &Path,
        use_json: bool,
    ) -> Result<()> {
        match self {
            ConfigCommand::Show => show(overrides, store, config_file, use_json),
        }
    }
}

fn show(
    overrides: &SettingsOverrides,
    store: &dyn CredentialStore,
    config_file: &Path,
    use_json: bool,
) -> Result<()> {
    let settings = merge(overrides, Settings::load(config_file)?.unwrap_or_default());
    let credentials = credential_source(store, |name| std::env::var(name).ok());

    if use_json {
        let value = serde_json::json!({
            "url": settings.url,
            "appId": settings.app_id,
            "tagId": settings.tag_id,
            "configFile": config_file.display().to_string(),
            "credentials": credentials,
        });
        json::print_json(&value)?;
        return Ok(());
    }

    let or_unset = |v: &str| {
        if v.is_empty() {
            "(not set)".to_string()
        } else {
            v.to_string()
        }
    };
    let mut tbl = table::create_table(&["SETTING", "VALUE"]);
    tbl.add_row(vec!["url".to_string(), or_unset(&settings.url)]);
    tbl.add_row(vec!["appId".to_string(), or_unset(&settings.app_id)]);
    tbl.add_row(vec!["tagId".to_string(), or_unset(&settings.tag_id)]);
    tbl.add_row(vec![
        "configFile".to_string(),
        config_file.display().to_string(),
    ]);
    tbl.add_row(vec!["credentials".to_string(), credentials]);
    table::print_table(tbl);
    Ok(())
}

/// Describe where credentials would be read from, without exposing them
fn credential_source<F>(store: &dyn CredentialStore, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if Credentials::from_lookup(env).is_some() {
        return "environment".to_string();
    }
    match store.load() {
        Ok(Some(creds)) => format!("keychain (user {})", creds.username),
        Ok(None) => "missing".to_string(),
        Err(e) => format!("unavailable ({})", e),
    }
}
