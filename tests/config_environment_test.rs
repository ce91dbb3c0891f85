// ABOUTME: Tests for loading client configuration from environment variables
// ABOUTME: Serialized because each test mutates the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use infojobs_oauth2::constants::env_config;
use infojobs_oauth2::{ClientConfig, OAuth2Client};
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(env_config::CLIENT_ID);
    env::remove_var(env_config::CLIENT_SECRET);
    env::remove_var(env_config::REDIRECT_URI);
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    clear_env();
    env::set_var(env_config::CLIENT_ID, "env-id");
    env::set_var(env_config::CLIENT_SECRET, "env-secret");
    env::set_var(env_config::REDIRECT_URI, "https://env/cb");

    let config = ClientConfig::from_env();

    assert_eq!(config, ClientConfig::new("env-id", "env-secret", "https://env/cb"));
    assert!(OAuth2Client::from_env().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_from_env_reports_unset_variables() {
    clear_env();
    env::set_var(env_config::CLIENT_ID, "env-id");

    let err = OAuth2Client::from_env().unwrap_err();

    assert_eq!(err.missing_fields(), ["client_secret", "redirect_uri"]);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_secret_not_required_for_validation_without_secret() {
    clear_env();
    env::set_var(env_config::CLIENT_ID, "env-id");
    env::set_var(env_config::REDIRECT_URI, "https://env/cb");

    let config = ClientConfig::from_env();

    assert!(config.validate(false).is_ok());
    assert!(config.validate(true).is_err());
    clear_env();
}
