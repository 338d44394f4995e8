//! Gemini adapter against a mock Generative Language API.

mod support;

use llm_gateway::prelude::*;
use serde_json::json;
use support::{collect_deltas, mock_config, read_fixture};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn chat_sends_system_instruction_and_key_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "sk-test"))
        .and(body_json(json!({
            "contents": [
                {"role": "user", "parts": [{"text": "Hi"}]},
                {"role": "model", "parts": [{"text": "Hello!"}]},
                {"role": "user", "parts": [{"text": "How are you?"}]}
            ],
            "systemInstruction": {"parts": [{"text": "Be kind."}]},
            "generationConfig": {"maxOutputTokens": 20}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Fine, "}, {"text": "thanks."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::new(mock_config(&server, "/v1beta"));
    let request = ChatRequest::new(
        "gemini-1.5-flash",
        vec![
            ChatMessage::system("Be kind."),
            ChatMessage::user("Hi"),
            ChatMessage::assistant("Hello!"),
            ChatMessage::user("How are you?"),
        ],
    )
    .with_max_tokens(20);
    let reply = adapter.chat(&request).await.unwrap();

    assert_eq!(reply.content, "Fine, thanks.");
    assert_eq!(reply.finish_reason, "STOP");
    assert_eq!(reply.usage, Some(Usage::new(12, 4, 16)));
}

#[tokio::test]
async fn stream_requests_sse_and_joins_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:streamGenerateContent"))
        .and(query_param("alt", "sse"))
        .and(query_param("key", "sk-test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(read_fixture("gemini", "chat-stream.sse"), "text/event-stream"),
        )
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::new(mock_config(&server, "/v1beta"));
    let request = ChatRequest::new("gemini-2.0-flash", vec![ChatMessage::user("Hi")]);
    let deltas = collect_deltas(adapter.chat_stream(&request).await.unwrap()).await;
    assert_eq!(deltas, vec!["Hi", " there!"]);
}

#[tokio::test]
async fn permission_denied_is_quota_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "Permission denied", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::new(mock_config(&server, "/v1beta"));
    let request = ChatRequest::new("gemini-1.5-pro", vec![ChatMessage::user("Hi")]);
    let err = adapter.chat(&request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::QuotaExceeded);
    assert!(err.message.contains("Permission denied"));
    assert!(!err.message.contains("sk-test"));
}

#[tokio::test]
async fn list_models_strips_prefix_and_keeps_generation_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", "sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {"name": "models/gemini-2.0-flash", "supportedGenerationMethods": ["generateContent", "countTokens"]},
                {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]},
                {"name": "models/gemini-1.5-pro", "supportedGenerationMethods": ["generateContent"]}
            ]
        })))
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::new(mock_config(&server, "/v1beta"));
    assert_eq!(adapter.list_models().await, vec!["gemini-1.5-pro", "gemini-2.0-flash"]);
}

#[tokio::test]
async fn list_models_falls_back_to_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": {"message": "API key not valid"}})))
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::new(mock_config(&server, "/v1beta"));
    assert_eq!(
        adapter.list_models().await,
        vec!["gemini-2.0-flash", "gemini-1.5-pro", "gemini-1.5-flash"]
    );
}

#[tokio::test]
async fn validate_api_key_probes_the_models_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", "good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", "bad"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let adapter = GeminiAdapter::new(mock_config(&server, "/v1beta"));
    assert!(adapter.validate_api_key("good").await);
    assert!(!adapter.validate_api_key("bad").await);
}
