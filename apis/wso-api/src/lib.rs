// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace ONE UEM API Types
//!
//! **IMPORTANT**: These types cover a *subset* of the Workspace ONE UEM
//! (formerly AirWatch) REST API. Only the two endpoints reinstallhub talks to
//! are described here:
//!
//! - `GET  /api/mdm/tags/{tagId}/devices` - devices carrying a tag
//! - `POST /api/mam/apps/internal/{appId}/install` - push an internal app
//!
//! The field names follow the PascalCase wire format used by UEM.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Header carrying the tenant API key
pub const TENANT_CODE_HEADER: &str = "aw-tenant-code";

// ============================================================================
// Newtypes
// ============================================================================

/// Numeric UEM device identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub i64);

impl DeviceId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DeviceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for DeviceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// A device returned by the tag search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "DeviceId")]
    pub id: DeviceId,

    #[serde(rename = "FriendlyName")]
    pub friendly_name: String,

    /// Timestamp at which the tag was applied, as sent by UEM
    #[serde(rename = "DateTagged", default)]
    pub date_tagged: String,

    #[serde(rename = "DeviceUuid", default)]
    pub device_uuid: String,
}

/// Response from `GET /api/mdm/tags/{tagId}/devices`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceSearchResponse {
    #[serde(rename = "Device", default)]
    pub devices: Vec<Device>,
}

impl DeviceSearchResponse {
    /// Decode a response body.
    ///
    /// UEM answers `204 No Content` when a tag has no devices, so an empty
    /// (or whitespace-only) body is an empty result rather than an error.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(body)
    }
}

/// Body of `POST /api/mam/apps/internal/{appId}/install`
///
/// UEM expects the device id as a string here, unlike the search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRequest {
    #[serde(rename = "DeviceId")]
    pub device_id: String,
}

impl InstallRequest {
    pub fn new(device_id: DeviceId) -> Self {
        Self {
            device_id: device_id.to_string(),
        }
    }
}

// ============================================================================
// Endpoint paths
// ============================================================================

/// Path of the tag device search endpoint
pub fn tag_devices_path(tag_id: &str) -> String {
    format!("/api/mdm/tags/{}/devices", urlencoding::encode(tag_id))
}

/// Path of the internal app install endpoint
pub fn internal_app_install_path(app_id: &str) -> String {
    format!("/api/mam/apps/internal/{}/install", urlencoding::encode(app_id))
}
