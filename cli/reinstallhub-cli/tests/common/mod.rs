// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for reinstallhub integration tests
//!
//! Every command runs against an empty temporary config directory with the
//! REINSTALLHUB_* variables of the parent process removed. Credentials are
//! always passed through the environment so the tests never reach the OS
//! keychain.

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated, clippy::expect_used)]

use assert_cmd::Command;
use std::path::Path;

pub const TAG_ID: &str = "10042";
pub const APP_ID: &str = "311";
pub const TENANT_CODE: &str = "TENANTKEY123";

/// Basic auth header for api-user:s3cret
pub const BASIC_AUTH: &str = "Basic YXBpLXVzZXI6czNjcmV0";

const ENV_VARS: &[&str] = &[
    "REINSTALLHUB_URL",
    "REINSTALLHUB_APP_ID",
    "REINSTALLHUB_TAG_ID",
    "REINSTALLHUB_USERNAME",
    "REINSTALLHUB_PASSWORD",
    "REINSTALLHUB_API_KEY",
    "REINSTALLHUB_CONFIG_DIR",
    "RUST_LOG",
];

/// Get a Command for running the reinstallhub binary
pub fn reinstallhub_cmd() -> Command {
    Command::cargo_bin("reinstallhub").expect("Failed to find reinstallhub binary")
}

/// A command isolated from the caller's environment and config
pub fn isolated_cmd(config_dir: &Path) -> Command {
    let mut cmd = reinstallhub_cmd();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("REINSTALLHUB_CONFIG_DIR", config_dir);
    cmd
}

/// An isolated command with settings and credentials for a mock tenant
pub fn tenant_cmd(config_dir: &Path, url: &str) -> Command {
    let mut cmd = isolated_cmd(config_dir);
    cmd.env("REINSTALLHUB_URL", url)
        .env("REINSTALLHUB_APP_ID", APP_ID)
        .env("REINSTALLHUB_TAG_ID", TAG_ID)
        .env("REINSTALLHUB_USERNAME", "api-user")
        .env("REINSTALLHUB_PASSWORD", "s3cret")
        .env("REINSTALLHUB_API_KEY", TENANT_CODE);
    cmd
}

/// Run a prepared command off the async runtime and collect its output
pub async fn run(mut cmd: Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute reinstallhub"))
        .await
        .expect("command task panicked")
}

/// Sample search payload with two tagged Macs
pub fn two_devices() -> serde_json::Value {
    serde_json::json!({
        "Device": [
            {
                "DeviceId": 4711,
                "FriendlyName": "alice-mbp",
                "DateTagged": "2024-03-01T10:00:00",
                "DeviceUuid": "0f5c6f5e-1111-2222-3333-444455556666"
            },
            {
                "DeviceId": 4712,
                "FriendlyName": "bob-imac",
                "DateTagged": "2024-03-02T11:30:00",
                "DeviceUuid": "9a8b7c6d-aaaa-bbbb-cccc-ddddeeeeffff"
            }
        ]
    })
}
