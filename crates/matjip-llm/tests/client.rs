//! Integration tests for `ChatClient` using wiremock HTTP mocks.

use matjip_core::LlmSettings;
use matjip_engine::{generate_course, CourseGenerator, CourseParams, Mood, PlanSource, TimeOfDay};
use matjip_llm::{ChatClient, LlmError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(max_retries: u32) -> LlmSettings {
    LlmSettings {
        api_key: Some("test-key".to_owned()),
        base_url: String::new(),
        model: "test-model".to_owned(),
        timeout_secs: 30,
        max_retries,
        backoff_base_ms: 0,
        temperature: 0.7,
        max_tokens: 1500,
    }
}

fn test_client(base_url: &str, max_retries: u32) -> ChatClient {
    ChatClient::with_base_url("test-key", &settings(max_retries), &format!("{base_url}/v1"))
        .expect("client construction should not fail")
}

fn reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
}

#[tokio::test]
async fn chat_posts_bearer_request_and_returns_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "messages": [{ "role": "user", "content": "코스 짜줘" }],
            "max_tokens": 1500
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("좋아요")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 2);
    let text = client.chat("코스 짜줘").await.expect("should return content");
    assert_eq!(text, "좋아요");
}

#[tokio::test]
async fn rate_limit_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("두 번째")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 2);
    let text = client.chat("p").await.expect("should succeed after retry");
    assert_eq!(text, "두 번째");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn persistent_rate_limit_exhausts_retries() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 2);
    let err = client.chat("p").await.unwrap_err();
    assert!(matches!(
        err,
        LlmError::RateLimited {
            retry_after_secs: None
        }
    ));
}

#[tokio::test]
async fn server_error_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("ok")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 1);
    assert_eq!(client.chat("p").await.unwrap(), "ok");
}

#[tokio::test]
async fn bad_request_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_string("model not found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 3);
    let err = client.chat("p").await.unwrap_err();
    match err {
        LlmError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "model not found");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_content_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 0);
    assert!(matches!(
        client.chat("p").await,
        Err(LlmError::EmptyResponse)
    ));
}

#[tokio::test]
async fn non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 0);
    assert!(matches!(
        client.chat("p").await,
        Err(LlmError::Deserialize { .. })
    ));
}

#[tokio::test]
async fn course_generator_impl_drives_the_engine() {
    let server = MockServer::start().await;

    let mut record = matjip_core::Restaurant::new(1, "성수 파스타");
    record.region = Some("서울".to_owned());
    record.district = Some("성동구".to_owned());
    record.neighborhood = Some("성수동".to_owned());
    record.category = Some("양식".to_owned());
    record.avg_price = Some(30_000.0);
    let records = vec![record];

    let plan_json = r#"```json
{"title": "성수 저녁", "spots": [{"id": 1, "time": "18:00"}]}
```"#;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(plan_json)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), 0);
    let params = CourseParams {
        region: "서울 성수/건대".to_owned(),
        mood: Mood::Foodie,
        budget: None,
        time: TimeOfDay::Evening,
        extra: None,
    };

    let raw = client.complete("ping").await.expect("trait call succeeds");
    assert!(raw.contains("성수 저녁"));

    let plan = generate_course(&client, &records, &params).await;
    assert_eq!(plan.source, PlanSource::Generated);
    assert_eq!(plan.title, "성수 저녁");
    assert_eq!(plan.spots[0].restaurant.id, 1);
}

#[tokio::test]
async fn exhausted_rate_limit_makes_engine_fall_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let mut record = matjip_core::Restaurant::new(1, "성수 파스타");
    record.neighborhood = Some("성수동".to_owned());
    record.category = Some("양식".to_owned());
    record.avg_price = Some(30_000.0);
    let records = vec![record];
    let params = CourseParams {
        region: "서울 성수/건대".to_owned(),
        mood: Mood::Foodie,
        budget: None,
        time: TimeOfDay::Evening,
        extra: None,
    };

    let client = test_client(&server.uri(), 1);
    let plan = generate_course(&client, &records, &params).await;
    assert_eq!(plan.source, PlanSource::Fallback);
    assert_eq!(plan.spots.len(), 1);
}
