// ABOUTME: Utility modules shared by the OAuth client
// ABOUTME: Query-string serialization and HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client configuration and helpers
pub mod http_client;
/// Empty-value filtering and query-string serialization
pub mod query;
