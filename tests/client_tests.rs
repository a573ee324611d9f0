//! Integration tests for the client surface.
//!
//! These tests verify construction, configuration, and error types without
//! requiring a running server.

use n8n_client::{ApiError, Client, ClientConfig, Error, RequestOptions};
use std::time::Duration;

#[test]
fn test_client_construction() {
    let client = Client::new(ClientConfig::new("http://localhost:5678", "test-key"));
    assert!(client.is_ok());

    let client = Client::new(ClientConfig::new("https://n8n.example.com", "test-key"));
    assert!(client.is_ok());
}

#[test]
fn test_empty_base_url_rejected() {
    let result = Client::new(ClientConfig::new("", "test-key"));
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("base_url")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_empty_api_key_rejected() {
    let result = Client::new(ClientConfig::new("http://localhost:5678", ""));
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("api_key")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_config_builder_pattern() {
    let config = ClientConfig::new("http://localhost:5678", "test-key")
        .with_timeout(Duration::from_secs(60))
        .with_default_header("X-Request-Source", "integration-suite")
        .with_api_version("v1");

    assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    assert_eq!(config.default_headers.len(), 1);
    assert!(Client::new(config).is_ok());
}

#[test]
fn test_trailing_slash_base_urls_accepted() {
    let client1 = Client::new(ClientConfig::new("http://localhost:5678", "test-key"));
    let client2 = Client::new(ClientConfig::new("http://localhost:5678/", "test-key"));
    assert!(client1.is_ok());
    assert!(client2.is_ok());
}

#[test]
fn test_request_options_builder() {
    let opts = RequestOptions::new()
        .timeout(Duration::from_secs(5))
        .header("X-Request-Id", "abc-123");

    assert_eq!(opts.timeout, Some(Duration::from_secs(5)));
    assert_eq!(opts.headers.len(), 1);
    assert!(opts.cancel.is_none());
}

#[test]
fn test_config_error_display() {
    let error = Error::Config("base_url must not be empty".to_string());
    let display = format!("{error}");
    assert!(display.contains("invalid client configuration"));
    assert!(display.contains("base_url"));
}

#[test]
fn test_api_error_display() {
    let error = Error::Api(ApiError {
        status: 404,
        method: reqwest::Method::GET,
        path: "/workflows/missing".to_string(),
        message: "Workflow not found".to_string(),
        body: None,
    });

    let display = format!("{error}");
    assert!(display.contains("404"));
    assert!(display.contains("/workflows/missing"));
    assert!(display.contains("Workflow not found"));
}

#[test]
fn test_api_error_classification() {
    let error = Error::Api(ApiError {
        status: 409,
        method: reqwest::Method::POST,
        path: "/tags".to_string(),
        message: "Tag already exists".to_string(),
        body: None,
    });

    let api = error.as_api().expect("expected an API error");
    assert!(api.is_conflict());
    assert!(api.is_client_error());
    assert!(!api.is_server_error());
    assert!(!api.is_not_found());
}

#[test]
fn test_timeout_error_carries_duration() {
    let error = Error::Timeout {
        timeout: Duration::from_millis(1500),
    };
    assert!(format!("{error}").contains("1500 ms"));
    assert!(error.as_api().is_none());
}

#[test]
fn test_abort_error_display() {
    let display = format!("{}", Error::Aborted);
    assert!(display.contains("aborted"));
}
