// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Command implementations

pub mod configure;
pub mod devices;
pub mod reinstall;
pub mod reset;
pub mod settings;

pub use settings::ConfigCommand;

/// Shown when the tag search comes back empty
pub const NO_DEVICES_MESSAGE: &str = "No Mac found with missing Hub";
