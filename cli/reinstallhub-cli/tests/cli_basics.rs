// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, argument parsing

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]
#![allow(clippy::expect_used)]

mod common;

use common::{isolated_cmd, reinstallhub_cmd};
use predicates::prelude::*;

#[test]
fn test_version() {
    reinstallhub_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reinstallhub"));
}

#[test]
fn test_help_lists_commands() {
    reinstallhub_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("configure"))
        .stdout(predicate::str::contains("devices"))
        .stdout(predicate::str::contains("reinstall"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn test_reinstall_help() {
    reinstallhub_cmd()
        .args(["reinstall", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn test_config_show_help() {
    reinstallhub_cmd()
        .args(["config", "show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_all_conflicts_with_device_ids() {
    reinstallhub_cmd()
        .args(["reinstall", "--all", "4711"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_non_numeric_device_id_rejected() {
    reinstallhub_cmd()
        .args(["reinstall", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_devices_without_settings_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    isolated_cmd(dir.path())
        .arg("devices")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tenant URL configured"));
}

#[test]
fn test_devices_without_credentials_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    isolated_cmd(dir.path())
        .args(["devices", "--url", "https://as1234.awmdm.com"])
        .args(["--app-id", "311", "--tag-id", "10042"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials"));
}

#[test]
fn test_reset_requires_force_without_terminal() {
    let dir = tempfile::tempdir().expect("tempdir");
    isolated_cmd(dir.path())
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
