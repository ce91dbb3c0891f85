// ABOUTME: Tests for authorization URL generation and client construction
// ABOUTME: Covers parameter order, encoding, scope flattening and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use infojobs_oauth2::{
    AuthUrlRequest, ClientConfig, ErrorCode, OAuth2Client, OAuth2ClientError, Scope,
};

fn test_config() -> ClientConfig {
    ClientConfig::new("C1", "S1", "https://app/cb")
}

fn test_client() -> OAuth2Client {
    OAuth2Client::new(test_config()).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_rejects_missing_client_id() {
    let err = OAuth2Client::new(ClientConfig::new("", "S1", "https://app/cb")).unwrap_err();

    assert!(matches!(err, OAuth2ClientError::InvalidClientConfig { .. }));
    assert_eq!(err.missing_fields(), ["client_id"]);
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
}

#[test]
fn test_new_rejects_empty_secret() {
    let err = OAuth2Client::new(ClientConfig::new("C1", "", "https://app/cb")).unwrap_err();

    assert_eq!(err.missing_fields(), ["client_secret"]);
}

#[test]
fn test_new_names_every_missing_field() {
    let err = OAuth2Client::new(ClientConfig::default()).unwrap_err();

    assert_eq!(
        err.missing_fields(),
        ["client_id", "client_secret", "redirect_uri"]
    );
    assert_eq!(
        err.to_string(),
        "invalid client config: missing client_id, client_secret, redirect_uri"
    );
}

#[test]
fn test_has_valid_client_options_checks_own_config() {
    let client = test_client();

    assert!(client.has_valid_client_options(None, true));
    assert!(client.has_valid_client_options(None, false));
}

#[test]
fn test_has_valid_client_options_checks_candidate() {
    let client = test_client();
    let no_secret = ClientConfig::new("C2", "", "https://other/cb");

    assert!(client.has_valid_client_options(Some(&no_secret), false));
    assert!(!client.has_valid_client_options(Some(&no_secret), true));

    let no_redirect = ClientConfig::new("C2", "S2", "");
    assert!(!client.has_valid_client_options(Some(&no_redirect), false));
}

#[test]
fn test_config_debug_redacts_secret() {
    let rendered = format!("{:?}", test_config());

    assert!(rendered.contains("C1"));
    assert!(!rendered.contains("S1"));
    assert!(rendered.contains("[REDACTED]"));
}

#[test]
fn test_secret_fingerprint_is_stable_and_short() {
    let config = test_config();
    let fingerprint = config.secret_fingerprint().unwrap();

    assert_eq!(fingerprint.len(), 8);
    assert_eq!(config.secret_fingerprint().unwrap(), fingerprint);
    assert!(ClientConfig::new("C1", "", "x").secret_fingerprint().is_none());
}

// =============================================================================
// generate_auth_url
// =============================================================================

#[test]
fn test_generate_auth_url_full_request() {
    let client = test_client();
    let request = AuthUrlRequest::new("code", ["email", "profile"]).with_state("xyz");

    let url = client.generate_auth_url(&request).unwrap();

    assert_eq!(
        url,
        "https://www.infojobs.net/api/oauth/user-authorize/index.xhtml\
         ?client_id=C1&redirect_uri=https%3A%2F%2Fapp%2Fcb&response_type=code\
         &state=xyz&scope=email%2Cprofile"
    );
}

#[test]
fn test_generate_auth_url_flattens_scope_list() {
    let client = test_client();
    let url = client
        .generate_auth_url(&AuthUrlRequest::new("code", vec!["a", "b"]))
        .unwrap();

    assert!(url.contains("scope=a%2Cb"));
    assert!(!url.contains('['));
    assert!(!url.contains("%5B"));
}

#[test]
fn test_generate_auth_url_accepts_joined_scope() {
    let client = test_client();
    let list = client
        .generate_auth_url(&AuthUrlRequest::new("code", ["a", "b"]))
        .unwrap();
    let joined = client
        .generate_auth_url(&AuthUrlRequest::new("code", "a,b"))
        .unwrap();

    assert_eq!(list, joined);
}

#[test]
fn test_generate_auth_url_omits_absent_state() {
    let client = test_client();
    let url = client
        .generate_auth_url(&AuthUrlRequest::new("code", "CV"))
        .unwrap();

    assert!(!url.contains("state="));
    assert!(url.ends_with("&response_type=code&scope=CV"));
}

#[test]
fn test_generate_auth_url_omits_empty_state() {
    let client = test_client();
    let url = client
        .generate_auth_url(&AuthUrlRequest::new("code", "CV").with_state(""))
        .unwrap();

    assert!(!url.contains("state="));
}

#[test]
fn test_generate_auth_url_is_deterministic() {
    let client = test_client();
    let request = AuthUrlRequest::new("code", ["email", "profile"]).with_state("xyz");

    assert_eq!(
        client.generate_auth_url(&request).unwrap(),
        client.generate_auth_url(&request).unwrap()
    );
}

#[test]
fn test_generate_auth_url_applies_overrides() {
    let client = test_client();
    let request = AuthUrlRequest::new("code", "CV")
        .with_client_id("OTHER")
        .with_redirect_uri("https://other/cb");

    let url = client.generate_auth_url(&request).unwrap();

    assert!(url.contains("client_id=OTHER&redirect_uri=https%3A%2F%2Fother%2Fcb"));
}

#[test]
fn test_generate_auth_url_ignores_empty_overrides() {
    let client = test_client();
    let request = AuthUrlRequest::new("code", "CV")
        .with_client_id("")
        .with_redirect_uri("");

    let url = client.generate_auth_url(&request).unwrap();

    assert!(url.contains("client_id=C1&redirect_uri=https%3A%2F%2Fapp%2Fcb"));
}

#[test]
fn test_generate_auth_url_rejects_missing_response_type() {
    let client = test_client();
    let request = AuthUrlRequest {
        scope: Scope::from("CV"),
        ..AuthUrlRequest::default()
    };

    let err = client.generate_auth_url(&request).unwrap_err();

    assert!(matches!(err, OAuth2ClientError::InvalidAuthUrlOptions { .. }));
    assert_eq!(err.missing_fields(), ["response_type"]);
    assert_eq!(err.code(), ErrorCode::MissingRequiredField);
}

#[test]
fn test_generate_auth_url_rejects_missing_scope() {
    let client = test_client();

    let err = client
        .generate_auth_url(&AuthUrlRequest::new("code", Vec::<String>::new()))
        .unwrap_err();
    assert_eq!(err.missing_fields(), ["scope"]);

    let err = client
        .generate_auth_url(&AuthUrlRequest::new("code", ""))
        .unwrap_err();
    assert_eq!(err.missing_fields(), ["scope"]);
}

#[test]
fn test_generate_auth_url_reports_both_missing_options() {
    let client = test_client();

    let err = client
        .generate_auth_url(&AuthUrlRequest::default())
        .unwrap_err();

    assert_eq!(err.missing_fields(), ["response_type", "scope"]);
}

#[test]
fn test_generate_auth_url_encodes_spaces_in_scope() {
    let client = test_client();
    let url = client
        .generate_auth_url(&AuthUrlRequest::new("code", ["my scope", "b"]))
        .unwrap();

    assert!(url.ends_with("scope=my%20scope%2Cb"));
}
