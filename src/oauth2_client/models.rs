// ABOUTME: Request and response types for the InfoJobs authorization code flow
// ABOUTME: Scope input shapes, grant types, and the token/error response union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::oauth;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Requested scopes, either as a list or as an already joined string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Individual scope names, joined with `,` when encoded
    List(Vec<String>),
    /// A pre-joined scope string, encoded as is
    Joined(String),
}

impl Scope {
    /// Render the scope as the single string sent to the provider
    #[must_use]
    pub fn to_param(&self) -> String {
        match self {
            Self::List(scopes) => scopes.join(oauth::SCOPE_SEPARATOR),
            Self::Joined(scope) => scope.clone(),
        }
    }

    /// True when no scope would be sent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(scopes) => scopes.iter().all(String::is_empty),
            Self::Joined(scope) => scope.is_empty(),
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::Joined(String::new())
    }
}

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Self::Joined(scope.to_owned())
    }
}

impl From<String> for Scope {
    fn from(scope: String) -> Self {
        Self::Joined(scope)
    }
}

impl From<Vec<String>> for Scope {
    fn from(scopes: Vec<String>) -> Self {
        Self::List(scopes)
    }
}

impl From<Vec<&str>> for Scope {
    fn from(scopes: Vec<&str>) -> Self {
        Self::List(scopes.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Scope {
    fn from(scopes: [&str; N]) -> Self {
        Self::List(scopes.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Options for a single authorization URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthUrlRequest {
    /// Requested scopes
    pub scope: Scope,
    /// OAuth `response_type`, normally `code`
    pub response_type: String,
    /// Opaque value echoed back on the redirect
    pub state: Option<String>,
    /// Overrides the configured client id for this URL when non-empty
    pub client_id: Option<String>,
    /// Overrides the configured redirect URI for this URL when non-empty
    pub redirect_uri: Option<String>,
}

impl AuthUrlRequest {
    /// Create a request with the two required fields
    #[must_use]
    pub fn new(response_type: impl Into<String>, scope: impl Into<Scope>) -> Self {
        Self {
            scope: scope.into(),
            response_type: response_type.into(),
            ..Self::default()
        }
    }

    /// Set the `state` parameter
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Override the client id for this URL only
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Override the redirect URI for this URL only
    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Names of required fields that are empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.response_type.is_empty() {
            missing.push("response_type");
        }
        if self.scope.is_empty() {
            missing.push("scope");
        }
        missing
    }
}

/// Token endpoint grant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    /// Exchange an authorization code
    AuthorizationCode,
    /// Exchange a refresh token
    RefreshToken,
}

impl GrantType {
    /// Value of the `grant_type` form field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthorizationCode => oauth::GRANT_AUTHORIZATION_CODE,
            Self::RefreshToken => oauth::GRANT_REFRESH_TOKEN,
        }
    }

    /// Name of the form field carrying the grant's credential
    #[must_use]
    pub const fn credential_field(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "code",
            Self::RefreshToken => "refresh_token",
        }
    }
}

/// Access token issued by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Token type, usually `bearer`
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
    /// The access token
    pub access_token: String,
    /// Refresh token, empty if the provider did not send one
    #[serde(default)]
    pub refresh_token: String,
}

impl AccessToken {
    /// Instant the token expires, given when it was issued
    #[must_use]
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        let seconds = i64::try_from(self.expires_in).unwrap_or(i64::MAX);
        Duration::try_seconds(seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Error document returned by the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}: {error_description}")]
pub struct AccessTokenError {
    /// Provider error code, e.g. `invalid_grant`
    pub error: String,
    /// Human-readable description
    #[serde(default)]
    pub error_description: String,
    /// Provider timestamp of the failure
    #[serde(default)]
    pub timestamp: String,
}

/// Parsed token endpoint body
///
/// The provider answers both outcomes through the same call, so the shape of
/// the JSON decides the variant: a document carrying `error` is an
/// [`AccessTokenError`], otherwise it must be an [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenResponse {
    /// Provider-reported failure
    Error(AccessTokenError),
    /// Issued token
    Token(AccessToken),
}

impl TokenResponse {
    /// True for the provider error shape
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Convert into a `Result` for callers that treat provider errors as failures
    ///
    /// # Errors
    ///
    /// Returns the [`AccessTokenError`] when the provider rejected the request
    pub fn into_result(self) -> Result<AccessToken, AccessTokenError> {
        match self {
            Self::Token(token) => Ok(token),
            Self::Error(error) => Err(error),
        }
    }
}
