// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for wso-client

use thiserror::Error;

/// Longest response body kept in a [`ClientError::Status`]
const MAX_ERROR_BODY: usize = 512;

/// Errors that can occur while talking to Workspace ONE UEM
#[derive(Error, Debug)]
pub enum ClientError {
    /// The tenant URL could not be used as a base URL
    #[error("Invalid tenant URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A credential could not be encoded into a request header
    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),

    /// Connection, TLS, or timeout failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// UEM answered with a non-success status
    #[error("UEM returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode UEM response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn status(status: reqwest::StatusCode, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_ERROR_BODY) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };
        Self::Status {
            status: status.as_u16(),
            body,
        }
    }

    /// HTTP status code, when the failure was a non-success response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
