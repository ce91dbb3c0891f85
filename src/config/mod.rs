// ABOUTME: Configuration types for the InfoJobs OAuth client
// ABOUTME: Environment-only loading of client credentials and provider endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Client credentials and provider endpoint configuration
pub mod oauth;

pub use oauth::{ClientConfig, OAuth2Endpoints};
