// ABOUTME: OAuth2 client for the InfoJobs authorization code grant
// ABOUTME: Builds authorization URLs and exchanges codes and refresh tokens for access tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::{AuthUrlRequest, GrantType, TokenResponse};
use crate::config::{ClientConfig, OAuth2Endpoints};
use crate::constants::oauth;
use crate::errors::{OAuth2ClientError, OAuth2Result};
use crate::utils::http_client::oauth_client;
use crate::utils::query::{append_pair, remove_empty, stringify};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

/// OAuth 2.0 client for InfoJobs
///
/// Configuration is validated once, at construction, and never changes
/// afterwards. The client holds no other state, so one instance can serve
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    config: ClientConfig,
    endpoints: OAuth2Endpoints,
    client: reqwest::Client,
}

impl OAuth2Client {
    /// Create a client for the production InfoJobs endpoints
    ///
    /// # Errors
    ///
    /// Returns [`OAuth2ClientError::InvalidClientConfig`] if the client id,
    /// secret or redirect URI is empty
    pub fn new(config: ClientConfig) -> OAuth2Result<Self> {
        Self::with_endpoints(config, OAuth2Endpoints::default())
    }

    /// Create a client against custom endpoints (sandboxes, tests)
    ///
    /// # Errors
    ///
    /// Returns [`OAuth2ClientError::InvalidClientConfig`] if the client id,
    /// secret or redirect URI is empty
    pub fn with_endpoints(config: ClientConfig, endpoints: OAuth2Endpoints) -> OAuth2Result<Self> {
        config.validate(true)?;

        let fingerprint = config.secret_fingerprint().unwrap_or_default();
        debug!(
            client_id = %config.client_id,
            secret_fingerprint = %fingerprint,
            token_url = %endpoints.token_url,
            "OAuth2 client configured"
        );

        Ok(Self {
            config,
            endpoints,
            client: oauth_client(),
        })
    }

    /// Create a client from `INFOJOBS_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`OAuth2ClientError::InvalidClientConfig`] naming every unset
    /// or empty variable's field
    pub fn from_env() -> OAuth2Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Replace the HTTP client, e.g. to add a timeout or proxy
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Get the client configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the provider endpoints
    #[must_use]
    pub const fn endpoints(&self) -> &OAuth2Endpoints {
        &self.endpoints
    }

    /// Check client options for the required fields
    ///
    /// With a `candidate`, that configuration is checked; otherwise the
    /// client's own. `client_secret` is only required when `require_secret`.
    #[must_use]
    pub fn has_valid_client_options(
        &self,
        candidate: Option<&ClientConfig>,
        require_secret: bool,
    ) -> bool {
        candidate
            .unwrap_or(&self.config)
            .missing_fields(require_secret)
            .is_empty()
    }

    /// Build the browser URL that starts the authorization code flow
    ///
    /// Parameters are emitted in a fixed order (`client_id`, `redirect_uri`,
    /// `response_type`, `state`, then `scope`) and empty values are dropped.
    /// A scope list is flattened to one comma-separated value.
    ///
    /// # Errors
    ///
    /// Returns [`OAuth2ClientError::InvalidAuthUrlOptions`] if `response_type`
    /// or `scope` is empty, or [`OAuth2ClientError::InvalidClientConfig`] if
    /// the client id or redirect URI is empty
    pub fn generate_auth_url(&self, request: &AuthUrlRequest) -> OAuth2Result<String> {
        self.config.validate(false)?;

        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(OAuth2ClientError::InvalidAuthUrlOptions { missing });
        }

        let client_id =
            non_empty(request.client_id.as_deref()).unwrap_or(self.config.client_id.as_str());
        let redirect_uri = non_empty(request.redirect_uri.as_deref())
            .unwrap_or(self.config.redirect_uri.as_str());

        let params = remove_empty([
            ("client_id", Some(client_id)),
            ("redirect_uri", Some(redirect_uri)),
            ("response_type", Some(request.response_type.as_str())),
            ("state", request.state.as_deref()),
        ]);

        let mut query = stringify(params.as_slice());
        append_pair(&mut query, "scope", &request.scope.to_param());

        Ok(format!("{}?{query}", self.endpoints.authorize_url))
    }

    /// Exchange an authorization code for an access token
    ///
    /// The parsed body is returned whether the provider issued a token or
    /// reported an error; match on [`TokenResponse`] to tell them apart.
    ///
    /// # Errors
    ///
    /// Returns [`OAuth2ClientError::InvalidClientConfig`] before any I/O if
    /// the configuration is incomplete, or [`OAuth2ClientError::Http`] if the
    /// request fails or the body is not a token document
    pub async fn get_access_token(&self, code: &str) -> OAuth2Result<TokenResponse> {
        self.request_token(GrantType::AuthorizationCode, code).await
    }

    /// Exchange a refresh token for a new access token
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_access_token`]
    pub async fn refresh_access_token(&self, refresh_token: &str) -> OAuth2Result<TokenResponse> {
        self.request_token(GrantType::RefreshToken, refresh_token).await
    }

    #[instrument(skip(self, credential), fields(grant_type = grant.as_str()))]
    async fn request_token(
        &self,
        grant: GrantType,
        credential: &str,
    ) -> OAuth2Result<TokenResponse> {
        self.config.validate(true)?;

        let params = [
            ("grant_type", grant.as_str()),
            (grant.credential_field(), credential),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .client
            .post(&self.endpoints.token_url)
            .header(CONTENT_TYPE, oauth::FORM_CONTENT_TYPE)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body: TokenResponse = response.json().await?;

        match &body {
            TokenResponse::Token(token) => debug!(
                %status,
                token_type = %token.token_type,
                expires_in = token.expires_in,
                "Token endpoint issued access token"
            ),
            TokenResponse::Error(error) => warn!(
                %status,
                error = %error.error,
                "Token endpoint reported error"
            ),
        }

        Ok(body)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
