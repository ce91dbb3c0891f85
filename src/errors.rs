// ABOUTME: Error types for client configuration, URL building and token exchange
// ABOUTME: Maps every failure to a stable error code without wrapping transport errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Validation failures are raised synchronously before any network I/O.
//! Transport and decode failures from `reqwest` pass through unchanged.
//! Provider-reported errors are not failures: they come back as
//! [`crate::oauth2_client::TokenResponse::Error`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes for this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A required request option is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    /// The token endpoint could not be reached or answered garbage
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    /// Client configuration is incomplete
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Stable string form, matching the serialized name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`crate::OAuth2Client`]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OAuth2ClientError {
    /// Client id, secret (when required) or redirect URI is missing or empty
    #[error("invalid client config: missing {}", .missing.join(", "))]
    InvalidClientConfig {
        /// Names of the missing fields, in declaration order
        missing: Vec<&'static str>,
    },

    /// `response_type` or `scope` is missing from an authorization URL request
    #[error("invalid auth url options: missing {}", .missing.join(", "))]
    InvalidAuthUrlOptions {
        /// Names of the missing fields, in declaration order
        missing: Vec<&'static str>,
    },

    /// Network failure or a response body that is not a token JSON document
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl OAuth2ClientError {
    /// Error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidClientConfig { .. } => ErrorCode::ConfigInvalid,
            Self::InvalidAuthUrlOptions { .. } => ErrorCode::MissingRequiredField,
            Self::Http(_) => ErrorCode::ExternalServiceError,
        }
    }

    /// Fields reported missing by a validation failure, empty otherwise
    #[must_use]
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::InvalidClientConfig { missing } | Self::InvalidAuthUrlOptions { missing } => {
                missing
            }
            Self::Http(_) => &[],
        }
    }
}

/// Result alias used throughout the crate
pub type OAuth2Result<T> = Result<T, OAuth2ClientError>;
