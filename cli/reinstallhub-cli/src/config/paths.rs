// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the reinstallhub configuration directory
///
/// Priority:
/// 1. REINSTALLHUB_CONFIG_DIR environment variable
/// 2. Platform config dir (~/.config/reinstallhub on Linux,
///    ~/Library/Application Support/reinstallhub on macOS)
/// 3. ~/.reinstallhub
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("REINSTALLHUB_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("reinstallhub"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".reinstallhub")
        })
}

/// Get the path to the settings file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}
