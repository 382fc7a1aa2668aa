//! Integration tests for DocumentClient against a mock document service

use document_client::{ClientError, Config, DocumentClient, DocumentServiceTrait, Operation};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DocumentClient {
    let config = Config {
        api_base: server.uri(),
        ..Config::default()
    };
    DocumentClient::new(&config).expect("document client")
}

#[tokio::test]
async fn test_upload_success_decodes_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "file_id": "f1",
            "summary": ["point1", "point2"],
            "chunks_indexed": 5
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .upload("report.pdf", b"%PDF-1.4 fake".to_vec())
        .await
        .unwrap();

    assert_eq!(response.file_id, "f1");
    assert_eq!(response.summary, vec!["point1", "point2"]);
    assert_eq!(response.chunks_indexed, 5);
}

#[tokio::test]
async fn test_upload_error_body_is_propagated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("index failure"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .upload("report.pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap_err();

    assert_eq!(err.operation(), Operation::Upload);
    let message = err.to_string();
    assert!(message.contains("upload"), "got: {message}");
    assert!(message.contains("index failure"), "got: {message}");

    match err {
        ClientError::Service { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "index failure");
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_chat_with_grounding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(serde_json::json!({
            "file_id": "f1",
            "query": "What was the growth?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "15% growth",
            "grounding": { "source_snippet": "Q4 report ... 15% growth" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let answer = client.chat("f1", "What was the growth?").await.unwrap();

    assert_eq!(answer.text, "15% growth");
    assert_eq!(
        answer.grounding.unwrap().source_snippet,
        "Q4 report ... 15% growth"
    );
}

#[tokio::test]
async fn test_chat_without_grounding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "text": "Not present in the PDF."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let answer = client.chat("f1", "unrelated question").await.unwrap();

    assert!(answer.grounding.is_none());
}

#[tokio::test]
async fn test_chat_error_leaves_body_intact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(404).set_body_string("file_id not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.chat("missing", "anything").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("chat"), "got: {message}");
    assert!(message.contains("file_id not found"), "got: {message}");
}

#[tokio::test]
async fn test_chat_empty_query_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.chat("f1", "   ").await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::InvalidInput {
            operation: Operation::Chat,
            ..
        }
    ));
}

#[tokio::test]
async fn test_highlight_returns_bytes() {
    let mock_server = MockServer::start().await;
    let payload = vec![0x25, 0x50, 0x44, 0x46];

    Mock::given(method("POST"))
        .and(path("/highlight"))
        .and(body_json(serde_json::json!({
            "file_id": "f1",
            "page": 2,
            "snippet": "15% growth"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client.highlight("f1", 2, "15% growth").await.unwrap();

    assert_eq!(bytes.as_ref(), payload.as_slice());
}

#[tokio::test]
async fn test_highlight_local_validation_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/highlight"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.highlight("f1", 0, "snippet").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput { .. }));

    let err = client.highlight("f1", 1, "  ").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::InvalidInput {
            operation: Operation::Highlight,
            ..
        }
    ));
}
