// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use comfy_table::{Table, presets::NOTHING};
use wso_client::Device;

/// Create a new table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

/// Format a table and print it
pub fn print_table(table: Table) {
    println!("{table}");
}

/// Table of tagged devices
pub fn device_table(devices: &[Device]) -> Table {
    let mut tbl = create_table(&["ID", "NAME", "TAGGED", "UUID"]);
    for d in devices {
        tbl.add_row(vec![
            d.id.to_string(),
            d.friendly_name.clone(),
            or_dash(&d.date_tagged).to_string(),
            or_dash(&d.device_uuid).to_string(),
        ]);
    }
    tbl
}

/// One-line label used by interactive pickers
pub fn device_label(device: &Device) -> String {
    format!(
        "{} ({}, tagged {})",
        device.friendly_name,
        device.id,
        or_dash(&device.date_tagged)
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
