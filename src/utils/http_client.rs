// ABOUTME: HTTP client construction for token endpoint requests
// ABOUTME: Builds reqwest clients without a timeout layer of their own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};

/// User-Agent sent with token endpoint requests
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Create the default HTTP client used for OAuth token exchanges
///
/// No request timeout is configured; callers that need one pass their own
/// client to [`crate::OAuth2Client::with_http_client`].
#[must_use]
pub fn oauth_client() -> Client {
    create_custom_client(|builder| builder.user_agent(USER_AGENT))
}

/// Create a new HTTP client with custom configuration
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_custom_client<F>(config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    let builder = ClientBuilder::new();
    config_fn(builder).build().unwrap_or_else(|_| Client::new())
}
