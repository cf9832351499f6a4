use std::time::Duration;

use idea_ai::{AnalysisError, GeminiClient, MAX_RESPONSE_LEN};
use idea_config::GeminiConfig;
use idea_core::entities::{AiAnalysis, Idea};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-test:generateContent";

fn idea() -> Idea {
    Idea {
        id: 1,
        title: "Onboarding".into(),
        problem: "New hires take weeks to ramp up".into(),
        solution: "Guided setup checklists".into(),
        impact: 8,
        confidence: 6,
        ease: 9,
        score: 43.2,
        date: "15/03/2025 14:05".into(),
        ai_analysis: None,
        description: None,
    }
}

fn client(server: &MockServer, timeout_secs: u64) -> GeminiClient {
    GeminiClient::new(&GeminiConfig {
        api_key: "test-key".into(),
        base_url: server.uri(),
        model: "gemini-test".into(),
        timeout_secs,
    })
    .unwrap()
}

fn analysis_json() -> Value {
    json!({
        "market_trends": "Remote work keeps onboarding budgets growing",
        "risks": ["Crowded HR tooling market", "Long sales cycles", "Low switching intent"],
        "naming": ["Onboardly", "FirstDay", "Ramp"],
        "steps": ["Interview ten HR leads", "Ship a checklist MVP", "Run a paid pilot"]
    })
}

fn reply_with_text(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 80}
    }))
}

async fn mount(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn success_returns_the_exact_analysis() {
    let server = MockServer::start().await;
    mount(&server, reply_with_text(&analysis_json().to_string())).await;

    let analysis = client(&server, 5).analyze(&idea()).await.unwrap();
    let expected: AiAnalysis = serde_json::from_value(analysis_json()).unwrap();
    assert_eq!(analysis, expected);
}

#[tokio::test]
async fn request_carries_key_and_json_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(reply_with_text(&analysis_json().to_string()))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, 5).analyze(&idea()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Title: Onboarding"));
    assert!(prompt.contains("Problem: New hires take weeks to ramp up"));
    assert!(prompt.contains("Solution: Guided setup checklists"));
}

#[tokio::test]
async fn fenced_reply_is_accepted() {
    let server = MockServer::start().await;
    let fenced = format!("```json\n{}\n```", analysis_json());
    mount(&server, reply_with_text(&fenced)).await;

    let analysis = client(&server, 5).analyze(&idea()).await.unwrap();
    assert_eq!(analysis.naming, vec!["Onboardly", "FirstDay", "Ramp"]);
}

#[tokio::test]
async fn server_error_is_api_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "Internal error encountered.", "status": "INTERNAL"}
        })),
    )
    .await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    match err {
        AnalysisError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal error encountered."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn error_messages_never_contain_the_key() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(403).set_body_string("forbidden")).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(429).insert_header("Retry-After", "7")).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::RateLimited {
            retry_after_secs: 7
        }
    ));
}

#[tokio::test]
async fn blocked_prompt_is_reported() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })),
    )
    .await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Blocked { ref reason } if reason == "SAFETY"));
}

#[tokio::test]
async fn reply_without_candidates_is_empty() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(json!({"candidates": []}))).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyReply));
}

#[tokio::test]
async fn two_item_lists_violate_the_contract() {
    let server = MockServer::start().await;
    let short = json!({
        "market_trends": "flat",
        "risks": ["one", "two"],
        "naming": ["a", "b", "c"],
        "steps": ["x", "y", "z"]
    });
    mount(&server, reply_with_text(&short.to_string())).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Schema(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_reply_text_is_parse_error() {
    let server = MockServer::start().await;
    mount(&server, reply_with_text("{\"market_trends\": ")).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_envelope_is_parse_error() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    let huge = "x".repeat(MAX_RESPONSE_LEN + 1);
    mount(&server, ResponseTemplate::new(200).set_body_string(huge)).await;

    let err = client(&server, 5).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::TooLarge { .. }), "got {err:?}");
}

#[tokio::test]
async fn slow_reply_times_out() {
    let server = MockServer::start().await;
    mount(
        &server,
        reply_with_text(&analysis_json().to_string()).set_delay(Duration::from_secs(3)),
    )
    .await;

    let err = client(&server, 1).analyze(&idea()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Timeout { secs: 1 }), "got {err:?}");
}
