// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Parallel Hub reinstallation across several devices

use futures_util::future::join_all;
use wso_api::DeviceId;

use crate::{ClientError, MdmClient};

/// Result of one install request
#[derive(Debug)]
pub struct InstallOutcome {
    pub device_id: DeviceId,
    pub result: Result<(), ClientError>,
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Push `app_id` to every device in `device_ids` concurrently.
///
/// Requests are independent: one failure does not stop the others. Duplicate
/// ids are sent once. Outcomes come back in first-seen input order.
pub async fn install_on_devices<C>(
    client: &C,
    app_id: &str,
    device_ids: &[DeviceId],
) -> Vec<InstallOutcome>
where
    C: MdmClient + ?Sized,
{
    let mut unique: Vec<DeviceId> = Vec::with_capacity(device_ids.len());
    for id in device_ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    tracing::info!(app_id, devices = unique.len(), "reinstalling Hub");

    let requests = unique.into_iter().map(|device_id| async move {
        let result = client.install_app(app_id, device_id).await;
        match &result {
            Ok(()) => tracing::info!(%device_id, "Hub reinstall requested"),
            Err(e) => tracing::warn!(%device_id, error = %e, "Hub reinstall failed"),
        }
        InstallOutcome { device_id, result }
    });

    join_all(requests).await
}
