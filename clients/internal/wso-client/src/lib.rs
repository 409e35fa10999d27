// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workspace ONE UEM Client
//!
//! A small hand-written client for the two UEM endpoints reinstallhub uses:
//! listing the devices that carry a tag, and pushing an internal app (the
//! Intelligent Hub installer) to a device.
//!
//! ## Usage
//!
//! ```ignore
//! use hub_credentials::Credentials;
//! use wso_client::{MdmClient, WsoClient, install_on_devices};
//!
//! let creds = Credentials::new("api-user", "s3cret", "TENANTKEY");
//! let client = WsoClient::new("https://as1234.awmdm.com", &creds)?;
//!
//! let devices = client.search_devices("10042").await?;
//! let ids: Vec<_> = devices.iter().map(|d| d.id).collect();
//! for outcome in install_on_devices(&client, "311", &ids).await {
//!     println!("{}: {}", outcome.device_id, outcome.is_success());
//! }
//! ```

mod client;
mod error;
mod install;

pub use client::{DEFAULT_TIMEOUT, MdmClient, WsoClient};
pub use error::ClientError;
pub use install::{InstallOutcome, install_on_devices};

// Re-export the wire types for convenience
pub use wso_api::{Device, DeviceId};

/// Install the ring rustls provider as the process default.
///
/// reqwest is built without a provider of its own. Installing twice is
/// harmless; the first provider wins.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
