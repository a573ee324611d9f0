//! Integration tests for API operations.
//!
//! These tests use wiremock to simulate server responses and verify that the
//! client correctly handles success, error, timeout, and cancellation
//! scenarios.

use n8n_client::{
    Client, ClientConfig, Error, ListExecutionsParams, ListWorkflowsParams, RequestOptions,
    UserInvite, VariableDraft, WorkflowDraft,
};
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new(server.uri(), "test-key")).unwrap()
}

#[tokio::test]
async fn test_list_workflows_sends_api_key_and_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .and(header("x-n8n-api-key", "test-key"))
        .and(query_param("active", "true"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "wf-1", "name": "Sync contacts", "active": true},
                {"id": "wf-2", "name": "Nightly report", "active": true}
            ],
            "nextCursor": "cursor-2"
        })))
        .mount(&mock_server)
        .await;

    let page = client(&mock_server)
        .list_workflows(
            ListWorkflowsParams {
                active: Some(true),
                limit: Some(2),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Sync contacts");
    assert_eq!(page.next_cursor.as_deref(), Some("cursor-2"));
}

#[tokio::test]
async fn test_list_workflows_follows_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .and(query_param("cursor", "cursor-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "wf-3", "name": "Archive", "active": false}],
            "nextCursor": null
        })))
        .mount(&mock_server)
        .await;

    let page = client(&mock_server)
        .list_workflows(
            ListWorkflowsParams {
                cursor: Some("cursor-2".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_create_workflow_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wf-9",
            "name": "New workflow",
            "active": false,
            "nodes": [],
            "connections": {}
        })))
        .mount(&mock_server)
        .await;

    let draft = WorkflowDraft {
        name: "New workflow".to_string(),
        connections: json!({}),
        settings: json!({}),
        ..Default::default()
    };
    let workflow = client(&mock_server)
        .create_workflow(&draft, None)
        .await
        .unwrap();

    assert_eq!(workflow.id, "wf-9");
    assert!(!workflow.active);
}

#[tokio::test]
async fn test_not_found_classification() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Workflow not found"
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).get_workflow("missing", None, None).await;

    match result {
        Err(Error::Api(api)) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.message, "Workflow not found");
            assert!(api.is_not_found());
            assert!(api.is_client_error());
            assert!(!api.is_server_error());
            assert!(!api.is_unauthorized());
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_message_from_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/executions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Internal server error"
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .list_executions(ListExecutionsParams::default(), None)
        .await;

    match result {
        Err(Error::Api(api)) => {
            assert_eq!(api.status, 500);
            assert_eq!(api.message, "Internal server error");
            assert!(api.is_server_error());
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_json_error_body_uses_fallback_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags/9"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).get_tag("9", None).await;

    match result {
        Err(Error::Api(api)) => assert_eq!(api.message, "HTTP 500 error"),
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags/9"))
        .respond_with(
            ResponseTemplate::new(502).set_body_raw("upstream unavailable", "text/plain"),
        )
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).get_tag("9", None).await;

    match result {
        Err(Error::Api(api)) => {
            assert_eq!(api.status, 502);
            assert_eq!(api.message, "upstream unavailable");
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_content_resolves_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/users/u-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).delete_user("u-1", None).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_timeout_classification() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "slow", "name": "Slow"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let opts = RequestOptions::new().timeout(Duration::from_millis(100));
    let result = client(&mock_server)
        .get_workflow("slow", None, Some(opts))
        .await;

    match result {
        Err(Error::Timeout { timeout }) => assert_eq!(timeout, Duration::from_millis(100)),
        other => panic!("Expected Timeout error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_per_call_timeout_does_not_stick() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/medium"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "medium", "name": "Medium"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    // Override is tighter than the 300 ms response delay.
    let opts = RequestOptions::new().timeout(Duration::from_millis(50));
    let first = client.get_workflow("medium", None, Some(opts)).await;
    assert!(matches!(first, Err(Error::Timeout { .. })));

    // The next call falls back to the client default (30 s) and succeeds.
    let second = client.get_workflow("medium", None, None).await;
    assert_eq!(second.unwrap().id, "medium");
}

#[tokio::test]
async fn test_external_cancellation_classifies_as_abort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "slow", "name": "Slow"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
    });

    let opts = RequestOptions::new().cancel(token);
    let result = client(&mock_server)
        .get_workflow("slow", None, Some(opts))
        .await;

    assert!(matches!(result, Err(Error::Aborted)));
}

#[tokio::test]
async fn test_triggered_token_wins_over_elapsed_timer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "slow", "name": "Slow"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    // Token is already triggered when the tiny timeout elapses; the abort
    // classification must win regardless of which waker runs first.
    let token = CancellationToken::new();
    token.cancel();

    let opts = RequestOptions::new()
        .timeout(Duration::from_millis(1))
        .cancel(token);
    let result = client(&mock_server)
        .get_workflow("slow", None, Some(opts))
        .await;

    assert!(matches!(result, Err(Error::Aborted)));
}

#[tokio::test]
async fn test_network_error_classification() {
    // Bind a port to learn a free one, then drop the listener so the
    // connection is refused before any response.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = Client::new(
        ClientConfig::new(format!("http://127.0.0.1:{port}"), "test-key")
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap();

    let result = client.get_tag("1", None).await;
    assert!(matches!(result, Err(Error::Network { .. })));
}

#[tokio::test]
async fn test_decode_error_on_mismatched_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/workflows/odd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).get_workflow("odd", None, None).await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1", "name": "a"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tags/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "2", "name": "b"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tags/3"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not here"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tags/4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "4", "name": "d"}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let (a, b, c, d) = tokio::join!(
        client.get_tag("1", None),
        client.get_tag("2", None),
        client.get_tag("3", None),
        client.get_tag("4", None),
    );

    assert_eq!(a.unwrap().name, "a");
    assert_eq!(b.unwrap().name, "b");
    assert!(matches!(c, Err(Error::Api(api)) if api.is_not_found()));
    assert_eq!(d.unwrap().name, "d");
}

#[tokio::test]
async fn test_per_call_header_overrides_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .and(header("x-request-source", "override"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [], "nextCursor": null})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(
        ClientConfig::new(mock_server.uri(), "test-key")
            .with_default_header("X-Request-Source", "default"),
    )
    .unwrap();

    let opts = RequestOptions::new().header("X-Request-Source", "override");
    let page = client.list_tags(None, None, Some(opts)).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_create_users_reports_per_invite_outcomes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .and(body_json(json!([
            {"email": "a@example.com", "role": "global:member"},
            {"email": "b@example.com"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"user": {"id": "u-1", "email": "a@example.com", "emailSent": true}},
            {"error": "user already exists"}
        ])))
        .mount(&mock_server)
        .await;

    let invites = vec![
        UserInvite {
            email: "a@example.com".to_string(),
            role: Some("global:member".to_string()),
        },
        UserInvite {
            email: "b@example.com".to_string(),
            role: None,
        },
    ];
    let results = client(&mock_server)
        .create_users(&invites, None)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].user.as_ref().unwrap().id, "u-1");
    assert_eq!(results[1].error.as_deref(), Some("user already exists"));
}

#[tokio::test]
async fn test_create_variable_with_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/variables"))
        .and(body_json(json!({"key": "region", "value": "eu-west-1"})))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let draft = VariableDraft {
        key: "region".to_string(),
        value: "eu-west-1".to_string(),
    };
    let result = client(&mock_server).create_variable(&draft, None).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_generate_audit_returns_raw_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/audit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Credentials Risk Report": {"risk": "credentials", "sections": []}
        })))
        .mount(&mock_server)
        .await;

    let report = client(&mock_server).generate_audit(None, None).await.unwrap();
    assert!(report.get("Credentials Risk Report").is_some());
}
