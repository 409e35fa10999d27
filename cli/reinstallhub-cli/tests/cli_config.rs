// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Settings inspection and non-interactive configure

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]
#![allow(clippy::expect_used)]

mod common;

use common::{isolated_cmd, tenant_cmd};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_config_show_env() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = tenant_cmd(dir.path(), "https://as1234.awmdm.com")
        .args(["config", "show", "-j"])
        .output()
        .expect("Failed to run command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let shown: Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|_| panic!("Should parse JSON output: {}", stdout));
    assert_eq!(shown["url"], "https://as1234.awmdm.com");
    assert_eq!(shown["appId"], common::APP_ID);
    assert_eq!(shown["tagId"], common::TAG_ID);
    assert_eq!(shown["credentials"], "environment");
    assert!(
        shown["configFile"]
            .as_str()
            .is_some_and(|p| p.ends_with("config.json"))
    );
}

#[test]
fn test_config_show_reads_settings_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"url": "https://stored.awmdm.com", "appId": "12", "tagId": "34"}"#,
    )
    .expect("write config");

    let output = isolated_cmd(dir.path())
        .args(["config", "show", "-j", "--tag-id", "99"])
        .output()
        .expect("Failed to run command");
    assert!(output.status.success());

    let shown: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(shown["url"], "https://stored.awmdm.com");
    assert_eq!(shown["appId"], "12");
    assert_eq!(shown["tagId"], "99");
}

#[test]
fn test_config_show_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    isolated_cmd(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SETTING"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_configure_rejects_bad_url() {
    let dir = tempfile::tempdir().expect("tempdir");
    isolated_cmd(dir.path())
        .args(["configure", "--url", "as1234.awmdm.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tenant URL"));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_configure_requires_values_without_terminal() {
    let dir = tempfile::tempdir().expect("tempdir");
    isolated_cmd(dir.path())
        .args(["configure", "--url", "https://as1234.awmdm.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hub internal app ID is required"));
}
