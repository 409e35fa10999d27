// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Wipe stored settings and keychain credentials

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Confirm;
use hub_credentials::CredentialStore;
use std::io::IsTerminal;
use std::path::Path;

use crate::config::Settings;

#[derive(Args, Clone)]
pub struct ResetArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: ResetArgs, store: &dyn CredentialStore, config_file: &Path) -> Result<()> {
    if !args.force {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!("Refusing to reset without confirmation; pass --force");
        }
        let confirmed = Confirm::new()
            .with_prompt("Delete stored settings and keychain credentials?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    if Settings::delete(config_file)? {
        println!("Deleted settings file");
    }
    store
        .clear()
        .context("Failed to remove keychain credentials")?;
    println!("Removed keychain credentials");
    Ok(())
}
