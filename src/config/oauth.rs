// ABOUTME: Client credential and endpoint configuration for the InfoJobs OAuth flow
// ABOUTME: Validates required fields and loads values from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{endpoints, env_config};
use crate::errors::{OAuth2ClientError, OAuth2Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{env, fmt};
use tracing::{debug, warn};

/// OAuth client credentials registered with the provider
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Redirect URI registered for the client
    pub redirect_uri: String,
}

impl ClientConfig {
    /// Create a configuration from its three parts
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Load configuration from `INFOJOBS_CLIENT_ID`, `INFOJOBS_CLIENT_SECRET`
    /// and `INFOJOBS_REDIRECT_URI`
    ///
    /// Unset variables become empty strings; validation reports them later.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |name: &str| {
            env::var(name).unwrap_or_else(|_| {
                warn!("OAuth config: {name} is not set");
                String::new()
            })
        };

        Self {
            client_id: read(env_config::CLIENT_ID),
            client_secret: read(env_config::CLIENT_SECRET),
            redirect_uri: read(env_config::REDIRECT_URI),
        }
    }

    /// Names of required fields that are empty
    ///
    /// `client_secret` is only checked when `require_secret` is set.
    #[must_use]
    pub fn missing_fields(&self, require_secret: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_empty() {
            missing.push("client_id");
        }
        if require_secret && self.client_secret.is_empty() {
            missing.push("client_secret");
        }
        if self.redirect_uri.is_empty() {
            missing.push("redirect_uri");
        }
        missing
    }

    /// Check that every required field is present
    ///
    /// # Errors
    ///
    /// Returns [`OAuth2ClientError::InvalidClientConfig`] naming the missing fields
    pub fn validate(&self, require_secret: bool) -> OAuth2Result<()> {
        let missing = self.missing_fields(require_secret);
        if missing.is_empty() {
            return Ok(());
        }
        debug!(?missing, "OAuth client configuration rejected");
        Err(OAuth2ClientError::InvalidClientConfig { missing })
    }

    /// First 8 hex chars of the SHA-256 of the client secret
    ///
    /// Lets logs correlate secrets without exposing them. `None` when the
    /// secret is empty.
    #[must_use]
    pub fn secret_fingerprint(&self) -> Option<String> {
        if self.client_secret.is_empty() {
            return None;
        }
        let digest = Sha256::digest(self.client_secret.as_bytes());
        Some(format!("{digest:x}").chars().take(8).collect())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Provider endpoints used by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Endpoints {
    /// Authorization endpoint the user's browser is sent to
    pub authorize_url: String,
    /// Token endpoint for code exchange and refresh
    pub token_url: String,
}

impl Default for OAuth2Endpoints {
    fn default() -> Self {
        Self {
            authorize_url: endpoints::AUTHORIZE_URL.to_owned(),
            token_url: endpoints::TOKEN_URL.to_owned(),
        }
    }
}
