// ABOUTME: OAuth 2.0 client implementation for the InfoJobs identity provider
// ABOUTME: Authorization URL generation plus code and refresh token exchanges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # OAuth 2.0 Client Module
//!
//! Client side of the authorization code grant:
//! - building the URL the user's browser is sent to
//! - exchanging the returned code for an access token
//! - refreshing an access token with its refresh token
//!
//! Token storage, refresh scheduling and callback handling are left to the caller.

/// Core OAuth 2.0 client implementation
pub mod client;
/// Request and response types
pub mod models;

pub use client::OAuth2Client;
pub use models::{
    AccessToken, AccessTokenError, AuthUrlRequest, GrantType, Scope, TokenResponse,
};
