// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Device list command

use anyhow::{Context, Result};
use wso_client::{Device, MdmClient};

use super::NO_DEVICES_MESSAGE;
use crate::output::{json, table};

pub async fn run(client: &dyn MdmClient, tag_id: &str, use_json: bool) -> Result<()> {
    let devices = fetch(client, tag_id).await?;

    if use_json {
        json::print_json(&devices)?;
    } else if devices.is_empty() {
        println!("{}", NO_DEVICES_MESSAGE);
    } else {
        table::print_table(table::device_table(&devices));
    }
    Ok(())
}

/// Search the tag, with a readable error
pub async fn fetch(client: &dyn MdmClient, tag_id: &str) -> Result<Vec<Device>> {
    client
        .search_devices(tag_id)
        .await
        .with_context(|| format!("Failed to load devices tagged {}", tag_id))
}
