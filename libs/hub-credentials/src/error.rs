// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for hub-credentials

use thiserror::Error;

/// Errors that can occur while reading or writing operator credentials
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The secure storage backend refused or failed the operation
    #[error("Credential store error: {0}")]
    Backend(String),

    /// A value cannot be stored or used as given
    #[error("Invalid credential: {0}")]
    InvalidSecret(String),
}

impl From<keyring::Error> for CredentialError {
    fn from(e: keyring::Error) -> Self {
        Self::Backend(e.to_string())
    }
}
