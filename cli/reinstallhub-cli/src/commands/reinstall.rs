// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Hub reinstall command

use anyhow::Result;
use clap::Args;
use dialoguer::{Confirm, MultiSelect};
use serde::Serialize;
use std::io::IsTerminal;
use wso_client::{DeviceId, InstallOutcome, MdmClient, install_on_devices};

use super::NO_DEVICES_MESSAGE;
use crate::config::Settings;
use crate::output::{json, table};

#[derive(Args, Clone)]
pub struct ReinstallArgs {
    /// Device ID(s); omit to pick from the tagged devices
    pub devices: Vec<DeviceId>,

    /// Reinstall on every tagged device
    #[arg(long, conflicts_with = "devices")]
    pub all: bool,

    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Per-device line of the JSON report
#[derive(Debug, Serialize)]
struct InstallReport {
    #[serde(rename = "deviceId")]
    device_id: DeviceId,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&InstallOutcome> for InstallReport {
    fn from(outcome: &InstallOutcome) -> Self {
        Self {
            device_id: outcome.device_id,
            success: outcome.is_success(),
            error: outcome.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

pub async fn run(
    args: ReinstallArgs,
    client: &dyn MdmClient,
    settings: &Settings,
    use_json: bool,
) -> Result<()> {
    let targets = match select_targets(&args, client, &settings.tag_id).await? {
        Some(targets) => targets,
        None => return nothing_to_do(NO_DEVICES_MESSAGE, use_json),
    };

    if targets.is_empty() {
        return nothing_to_do("No devices selected", use_json);
    }

    if !args.yes && !confirm(targets.len())? {
        return nothing_to_do("Aborted", use_json);
    }

    if !use_json {
        println!("Reinstalling Hub on {} device(s)...", targets.len());
    }
    let outcomes = install_on_devices(client, &settings.app_id, &targets).await;
    report(&outcomes, use_json)
}

/// Work out which devices to target.
///
/// `Ok(None)` means the tag has no devices.
async fn select_targets(
    args: &ReinstallArgs,
    client: &dyn MdmClient,
    tag_id: &str,
) -> Result<Option<Vec<DeviceId>>> {
    if !args.devices.is_empty() {
        return Ok(Some(args.devices.clone()));
    }

    if !args.all && !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "No devices given. Pass device IDs, use --all, or run in a terminal to pick interactively"
        );
    }

    let devices = super::devices::fetch(client, tag_id).await?;
    if devices.is_empty() {
        return Ok(None);
    }

    if args.all {
        return Ok(Some(devices.iter().map(|d| d.id).collect()));
    }

    let labels: Vec<String> = devices.iter().map(table::device_label).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select Macs to reinstall (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(Some(picked.into_iter().map(|i| devices[i].id).collect()))
}

/// No install was attempted: an empty report in JSON mode, else the message
fn nothing_to_do(message: &str, use_json: bool) -> Result<()> {
    if use_json {
        json::print_json(&Vec::<InstallReport>::new())
    } else {
        println!("{}", message);
        Ok(())
    }
}

fn confirm(count: usize) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("Refusing to reinstall without confirmation; pass --yes");
    }
    Ok(Confirm::new()
        .with_prompt(format!("Reinstall the Hub on {} device(s)?", count))
        .default(false)
        .interact()?)
}

fn report(outcomes: &[InstallOutcome], use_json: bool) -> Result<()> {
    if use_json {
        let reports: Vec<InstallReport> = outcomes.iter().map(InstallReport::from).collect();
        json::print_json(&reports)?;
    } else {
        for outcome in outcomes {
            match &outcome.result {
                Ok(()) => println!("Reinstall requested for device {}", outcome.device_id),
                Err(e) => println!("Reinstall failed for device {}: {}", outcome.device_id, e),
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} reinstall request(s) failed",
            failed,
            outcomes.len()
        );
    }
    Ok(())
}
