// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! UEM REST client

use async_trait::async_trait;
use hub_credentials::Credentials;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use wso_api::{Device, DeviceId, DeviceSearchResponse, InstallRequest, TENANT_CODE_HEADER};

use crate::ClientError;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// The UEM operations reinstallhub depends on.
///
/// The CLI talks to this trait so that install orchestration can be
/// exercised against a fake.
#[async_trait]
pub trait MdmClient: Send + Sync {
    /// Devices carrying the given tag
    async fn search_devices(&self, tag_id: &str) -> Result<Vec<Device>, ClientError>;

    /// Push the internal app `app_id` to one device
    async fn install_app(&self, app_id: &str, device_id: DeviceId) -> Result<(), ClientError>;
}

/// Concrete UEM client backed by reqwest
#[derive(Clone)]
pub struct WsoClient {
    base_url: String,
    http: reqwest::Client,
}

impl WsoClient {
    /// Create a client for the tenant at `base_url`.
    ///
    /// Every request carries the tenant code, Basic auth, and JSON content
    /// headers built from `credentials`.
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        crate::install_crypto_provider();

        let mut auth = HeaderValue::from_str(&credentials.basic_auth_header())
            .map_err(|_| ClientError::InvalidHeader("Authorization"))?;
        auth.set_sensitive(true);

        let mut tenant_code = HeaderValue::from_str(credentials.api_key())
            .map_err(|_| ClientError::InvalidHeader(TENANT_CODE_HEADER))?;
        tenant_code.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(HeaderName::from_static(TENANT_CODE_HEADER), tenant_code);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reinstallhub/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Tenant base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MdmClient for WsoClient {
    async fn search_devices(&self, tag_id: &str) -> Result<Vec<Device>, ClientError> {
        let url = format!("{}{}", self.base_url, wso_api::tag_devices_path(tag_id));
        tracing::debug!(%url, "searching tagged devices");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), %body, "device search response");

        if !status.is_success() {
            return Err(ClientError::status(status, &body));
        }

        let devices = DeviceSearchResponse::from_body(&body)?.devices;
        if devices.is_empty() {
            tracing::info!(tag_id, "no devices carry the tag");
        } else {
            tracing::info!(tag_id, count = devices.len(), "fetched tagged devices");
        }
        Ok(devices)
    }

    async fn install_app(&self, app_id: &str, device_id: DeviceId) -> Result<(), ClientError> {
        let url = format!(
            "{}{}",
            self.base_url,
            wso_api::internal_app_install_path(app_id)
        );
        let request = InstallRequest::new(device_id);
        tracing::debug!(%url, device_id = %request.device_id, "requesting app install");

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status, &body));
        }

        tracing::debug!(%device_id, status = status.as_u16(), "install accepted");
        Ok(())
    }
}

/// Validate a tenant URL and strip any trailing slash
fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let parsed = url::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(trimmed.to_string())
}
