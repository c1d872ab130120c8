use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use bkd_wrapped::application::ports::{LlmClient, LlmClientError};
use bkd_wrapped::infrastructure::llm::OpenAiCompatibleClient;

fn client_for(server: &MockServer) -> OpenAiCompatibleClient {
    OpenAiCompatibleClient::new(&server.url("/v1"), "sk-test", Duration::from_secs(5))
        .unwrap()
        .with_generation(0.2, Some(2048))
}

#[tokio::test]
async fn given_successful_response_when_completing_then_returns_first_choice() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("Authorization", "Bearer sk-test")
                .body_contains("\"model\":\"gpt-4o-mini\"")
                .body_contains("\"max_tokens\":2048");
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": "{\"nama\":\"Dr. X\"}"}}]
            }));
        })
        .await;

    let text = client_for(&server)
        .complete("gpt-4o-mini", "prompt")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(text, "{\"nama\":\"Dr. X\"}");
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let result = client_for(&server).complete("gpt-4o-mini", "prompt").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_too_many_requests_when_completing_then_returns_rate_limited() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429);
        })
        .await;

    let result = client_for(&server).complete("gpt-4o-mini", "prompt").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_unreachable_server_when_completing_then_returns_api_request_failed() {
    let client = OpenAiCompatibleClient::new(
        "http://127.0.0.1:1/v1",
        "sk-test",
        Duration::from_secs(2),
    )
    .unwrap();

    let result = client.complete("gpt-4o-mini", "prompt").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
