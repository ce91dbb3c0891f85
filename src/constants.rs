// ABOUTME: Provider endpoints, grant identifiers and environment variable names
// ABOUTME: Process-wide immutable values shared by the client, config and logging modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// InfoJobs endpoint URLs
pub mod endpoints {
    /// Base URL of the InfoJobs REST API
    pub const API_URL: &str = "https://www.infojobs.net/api";

    /// Browser-facing authorization endpoint the user is redirected to
    pub const AUTHORIZE_URL: &str = "https://www.infojobs.net/api/oauth/user-authorize/index.xhtml";

    /// Token endpoint used for both code exchange and refresh
    pub const TOKEN_URL: &str = "https://www.infojobs.net/oauth/authorize";
}

/// OAuth 2.0 parameter names and values
pub mod oauth {
    /// `grant_type` value for the authorization code exchange
    pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
    /// `grant_type` value for the refresh exchange
    pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

    /// Separator used when a scope list is flattened into one parameter
    pub const SCOPE_SEPARATOR: &str = ",";

    /// Content type of token endpoint request bodies
    pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
}

/// Environment variable names read by the configuration loaders
pub mod env_config {
    /// OAuth client identifier
    pub const CLIENT_ID: &str = "INFOJOBS_CLIENT_ID";
    /// OAuth client secret
    pub const CLIENT_SECRET: &str = "INFOJOBS_CLIENT_SECRET";
    /// Registered redirect URI
    pub const REDIRECT_URI: &str = "INFOJOBS_REDIRECT_URI";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Crate name as it appears in tracing targets
    pub const INFOJOBS_OAUTH2: &str = "infojobs_oauth2";
}
