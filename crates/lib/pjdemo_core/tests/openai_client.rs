//! Integration tests — run the completion client against a local upstream.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pjdemo_core::completion::{
    Backend, CompletionError, OpenAiCompatibleClient, ProviderConfig, TextGenerator,
};
use pjdemo_core::prompts::{self, ReportModel};
use serde_json::{Value, json};

/// Canned upstream that records what it receives.
#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl Upstream {
    fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn completion(text: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": text}, "finish_reason": "stop"}
            ]
        });
        Self::new(StatusCode::OK, body.to_string())
    }
}

async fn completions(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    upstream.seen.lock().unwrap().push((auth, body));
    if let Some(delay) = upstream.delay {
        tokio::time::sleep(delay).await;
    }
    (upstream.status, upstream.body.clone())
}

/// Serve `upstream` on an ephemeral port and return its base URL.
async fn spawn(upstream: Upstream) -> String {
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(upstream);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve upstream");
    });
    format!("http://{addr}/v1")
}

fn client(backend: Backend, base_url: &str, timeout_secs: &str) -> OpenAiCompatibleClient {
    let key_var = match backend {
        Backend::OpenAi => ("OPENAI_API_KEY", "OPENAI_BASE_URL"),
        Backend::SiliconFlow => ("SILICONFLOW_API_KEY", "SILICONFLOW_BASE_URL"),
    };
    let base_url = base_url.to_string();
    let timeout = timeout_secs.to_string();
    let config = ProviderConfig::from_lookup(backend, move |name| {
        if name == key_var.0 {
            Some("sk-test".to_string())
        } else if name == key_var.1 {
            Some(base_url.clone())
        } else if name == "LLM_TIMEOUT_SECS" {
            Some(timeout.clone())
        } else {
            None
        }
    })
    .expect("config");
    OpenAiCompatibleClient::new(config).expect("client")
}

#[tokio::test]
async fn returns_first_choice_and_sends_bearer_auth() {
    let upstream = Upstream::completion("清华大学是一所历史悠久的综合性大学。");
    let seen = upstream.seen.clone();
    let base = spawn(upstream).await;

    let client = client(Backend::OpenAi, &base, "10");
    let text = client
        .generate(&prompts::education_description("清华大学", "计算机科学与技术"))
        .await
        .expect("generate");
    assert_eq!(text, "清华大学是一所历史悠久的综合性大学。");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 512);
    assert_eq!(body["n"], 1);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert!(
        body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains("清华大学 计算机科学与技术")
    );
}

#[tokio::test]
async fn deepseek_report_body_carries_extended_sampling() {
    let upstream = Upstream::completion("报告");
    let seen = upstream.seen.clone();
    let base = spawn(upstream).await;

    let client = client(Backend::SiliconFlow, &base, "10");
    let text = client
        .generate(&prompts::pj1_report("节点 0: 类别 2", ReportModel::DeepSeekR1))
        .await
        .expect("generate");
    assert_eq!(text, "报告");

    let seen = seen.lock().unwrap();
    let (_, body) = &seen[0];
    assert_eq!(body["model"], "deepseek-ai/DeepSeek-R1");
    assert_eq!(body["stream"], false);
    assert_eq!(body["top_k"], 50);
    assert_eq!(body["stop"], json!(["null"]));
    assert_eq!(body["response_format"], json!({"type": "text"}));
    assert_eq!(body["messages"][0]["role"], "user");
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let base = spawn(Upstream::new(
        StatusCode::UNAUTHORIZED,
        r#"{"error":{"message":"Incorrect API key provided"}}"#,
    ))
    .await;

    let err = client(Backend::OpenAi, &base, "10")
        .generate(&prompts::life_status_summary("posts"))
        .await
        .unwrap_err();
    match err {
        CompletionError::Api {
            backend,
            status,
            body,
        } => {
            assert_eq!(backend, Backend::OpenAi);
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_empty_response() {
    let base = spawn(Upstream::new(StatusCode::OK, r#"{"choices":[]}"#)).await;
    let err = client(Backend::OpenAi, &base, "10")
        .generate(&prompts::life_status_summary("posts"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::EmptyResponse), "got {err:?}");
}

#[tokio::test]
async fn garbage_body_is_malformed_response() {
    let base = spawn(Upstream::new(StatusCode::OK, "<html>gateway</html>")).await;
    let err = client(Backend::OpenAi, &base, "10")
        .generate(&prompts::life_status_summary("posts"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let mut upstream = Upstream::completion("too late");
    upstream.delay = Some(Duration::from_secs(5));
    let base = spawn(upstream).await;

    let err = client(Backend::OpenAi, &base, "1")
        .generate(&prompts::life_status_summary("posts"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::Timeout(1)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    // Bind and immediately drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(Backend::OpenAi, &format!("http://{addr}/v1"), "5")
        .generate(&prompts::life_status_summary("posts"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)), "got {err:?}");
}
