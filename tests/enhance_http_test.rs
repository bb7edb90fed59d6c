use anyhow::Result;
use httpmock::prelude::*;
use prompt_enhancer::core::meta_prompt::META_PROMPT;
use prompt_enhancer::{
    fallback, EnhanceError, EnhancementClient, EnhancementRequest, FailureKind, ServiceConfig,
    ToastKind, ToastStore,
};

const CHAT_PATH: &str = "/api/paas/v4/chat/completions";

fn client_for(server: &MockServer) -> EnhancementClient {
    EnhancementClient::new(ServiceConfig {
        endpoint: server.url(CHAT_PATH),
        model: "glm-test".to_string(),
        api_key: "default-key".to_string(),
    })
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
}

#[tokio::test]
async fn test_enhance_posts_chat_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(CHAT_PATH)
            .header("authorization", "Bearer default-key")
            .header("content-type", "application/json")
            .json_body_partial(r#"{"model": "glm-test", "temperature": 0.7}"#)
            .body_contains(r#""role":"system""#)
            .body_contains(r#""role":"user","content":"我想写一篇关于气候变化的文章""#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion("# 气候变化文章写作提示词"));
    });

    let client = client_for(&server);
    let result = client
        .enhance(&EnhancementRequest::new("我想写一篇关于气候变化的文章"))
        .await?;

    api_mock.assert();
    assert_eq!(result.enhanced, "# 气候变化文章写作提示词");
    assert_eq!(result.original, "我想写一篇关于气候变化的文章");
    Ok(())
}

#[tokio::test]
async fn test_system_message_carries_meta_prompt() -> Result<()> {
    let server = MockServer::start();
    let system_message = serde_json::to_string(&META_PROMPT)?;
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH).body_contains(system_message);
        then.status(200).json_body(completion("ok"));
    });

    client_for(&server)
        .enhance(&EnhancementRequest::new("hello"))
        .await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_request_api_key_overrides_default() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(CHAT_PATH)
            .header("authorization", "Bearer user-key");
        then.status(200).json_body(completion("ok"));
    });

    let result = client_for(&server)
        .enhance(&EnhancementRequest::new("hello").with_api_key("user-key"))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.enhanced, "ok");
}

#[tokio::test]
async fn test_rate_limited_response_is_surfaced() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH);
        then.status(429).body(r#"{"error": "too many requests"}"#);
    });

    let err = client_for(&server)
        .enhance(&EnhancementRequest::new("帮我写个Python代码"))
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, EnhanceError::Http { status: 429 }));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn test_every_non_success_status_is_surfaced() {
    for status in [400u16, 401, 403, 404, 418, 500, 502, 503] {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(CHAT_PATH);
            then.status(status);
        });

        let err = client_for(&server)
            .enhance(&EnhancementRequest::new("写文章"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(status), "status {}", status);
        assert_eq!(err.kind(), FailureKind::Http);
    }
}

#[tokio::test]
async fn test_missing_message_content_is_format_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH);
        then.status(200)
            .json_body(serde_json::json!({"choices": [{"index": 0}]}));
    });

    let err = client_for(&server)
        .enhance(&EnhancementRequest::new("写文章"))
        .await
        .unwrap_err();

    assert!(matches!(err, EnhanceError::InvalidResponse));
    assert_eq!(err.to_string(), "Invalid response format");
}

#[tokio::test]
async fn test_unparseable_success_body_degrades_to_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH);
        then.status(200).body("<html>maintenance</html>");
    });

    let input = "研究一下新能源汽车市场";
    let result = client_for(&server)
        .enhance(&EnhancementRequest::new(input))
        .await
        .unwrap();

    assert_eq!(result.enhanced, fallback(input));
    assert!(result.enhanced.starts_with("# 分析任务增强提示词"));
    assert_eq!(result.original, input);
}

#[tokio::test]
async fn test_unreachable_host_is_surfaced() {
    let client = EnhancementClient::new(ServiceConfig {
        endpoint: "http://127.0.0.1:1/v1/chat/completions".to_string(),
        model: "glm-test".to_string(),
        api_key: "k".to_string(),
    });

    let err = client
        .enhance(&EnhancementRequest::new("写文章"))
        .await
        .unwrap_err();

    assert!(matches!(err, EnhanceError::Request(_)));
    assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn test_malformed_endpoint_is_surfaced_as_type_failure() {
    let client = EnhancementClient::new(ServiceConfig {
        endpoint: "not a url".to_string(),
        model: "glm-test".to_string(),
        api_key: "k".to_string(),
    });

    let err = client
        .enhance(&EnhancementRequest::new("写文章"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Type);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH).body_contains("first");
        then.status(200).json_body(completion("one"));
    });
    server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH).body_contains("second");
        then.status(500);
    });

    let client = client_for(&server);
    let first = EnhancementRequest::new("first");
    let second = EnhancementRequest::new("second");
    let (a, b) = tokio::join!(client.enhance(&first), client.enhance(&second));

    assert_eq!(a.unwrap().enhanced, "one");
    assert_eq!(b.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_caller_reports_outcomes_through_toasts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(CHAT_PATH);
        then.status(401);
    });

    let toasts = ToastStore::new();
    let client = client_for(&server);

    match client.enhance(&EnhancementRequest::new("写文章")).await {
        Ok(_) => {
            toasts.success("Prompt enhanced", None);
        }
        Err(e) => {
            toasts.error("Enhancement failed", Some(e.to_string()));
        }
    }

    let shown = toasts.toasts();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, ToastKind::Error);
    assert_eq!(shown[0].message.as_deref(), Some("HTTP error! status: 401"));
    assert_eq!(shown[0].duration_ms, 8000);
    toasts.dispose();
}
