// ABOUTME: Main library entry point for the InfoJobs OAuth2 client
// ABOUTME: Authorization code grant: auth URL generation, code exchange and token refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # InfoJobs OAuth2
//!
//! Client side of the OAuth 2.0 authorization code grant for InfoJobs.
//!
//! - **Authorization URL**: [`OAuth2Client::generate_auth_url`]
//! - **Code exchange**: [`OAuth2Client::get_access_token`]
//! - **Refresh**: [`OAuth2Client::refresh_access_token`]
//!
//! Client configuration is validated when the client is built, so a
//! misconfigured client never reaches the network.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use infojobs_oauth2::{AuthUrlRequest, ClientConfig, OAuth2Client, TokenResponse};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OAuth2Client::new(ClientConfig::new(
//!         "my-client-id",
//!         "my-client-secret",
//!         "https://example.com/callback",
//!     ))?;
//!
//!     let url = client.generate_auth_url(
//!         &AuthUrlRequest::new("code", ["CV", "MY_APPLICATIONS"]).with_state("xyz"),
//!     )?;
//!     println!("Open {url}");
//!
//!     match client.get_access_token("code-from-redirect").await? {
//!         TokenResponse::Token(token) => println!("expires in {}s", token.expires_in),
//!         TokenResponse::Error(error) => eprintln!("rejected: {error}"),
//!     }
//!     Ok(())
//! }
//! ```

/// Client credentials and provider endpoints
pub mod config;

/// Provider endpoints, parameter names and environment variable names
pub mod constants;

/// Error types and error codes
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// OAuth 2.0 client, request and response types
pub mod oauth2_client;

/// Query-string and HTTP client helpers
pub mod utils;

pub use config::{ClientConfig, OAuth2Endpoints};
pub use errors::{ErrorCode, OAuth2ClientError, OAuth2Result};
pub use oauth2_client::{
    AccessToken, AccessTokenError, AuthUrlRequest, GrantType, OAuth2Client, Scope, TokenResponse,
};
