//! Integration tests for the HTTP API
//!
//! Every endpoint is stateless, so each test builds a fresh router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Map, Value};
use tower::ServiceExt;
use traitscope::core::create_router;
use traitscope::core::question_bank::{stage1_questions, stage2_questions};

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = create_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn answers_for(questions: &[traitscope::types::Question], value: u8) -> Value {
    let map: Map<String, Value> = questions
        .iter()
        .map(|q| (q.id.clone(), json!(value)))
        .collect();
    Value::Object(map)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_traits_list_and_search() {
    let (status, json) = get("/traits").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 26);

    let (status, json) = get("/traits?q=rope").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["id"].as_str())
        .collect();
    assert!(ids.contains(&"rigger"));
    assert!(ids.contains(&"rope-bunny"));
    assert!(ids.len() < 26);
}

#[tokio::test]
async fn test_get_trait() {
    let (status, json) = get("/traits/brat-tamer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "brat-tamer");
    assert!(json["name"].is_string());

    let (status, _) = get("/traits/unicorn").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_questions_by_stage() {
    let (status, json) = get("/questions/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), stage1_questions().len());

    let (status, json) = get("/questions/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), stage2_questions().len());
    assert_eq!(json[0]["stage"], 2);

    let (status, _) = get("/questions/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_score_stage1() {
    let body = json!({ "answers": answers_for(stage1_questions(), 4) });
    let (status, json) = post("/score/stage1", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["signal"], "high");
    assert_eq!(json["top3"].as_array().unwrap().len(), 3);

    let (status, json) = post("/score/stage1", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["signal"], "low");
}

#[tokio::test]
async fn test_score_stage2_incomplete() {
    let body = json!({ "stage2_answers": { "s2-01": 4 } });
    let (status, json) = post("/score/stage2", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["reason"], "R201_ENVELOPE_STAGE2_INCOMPLETE");
}

#[tokio::test]
async fn test_score_stage2_complete() {
    let body = json!({
        "stage1_answers": answers_for(stage1_questions(), 3),
        "stage2_answers": answers_for(stage2_questions(), 2),
    });
    let (status, json) = post("/score/stage2", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["version"], 1);
    assert_eq!(json["stage1Signal"], "high");
    assert_eq!(json["scores"].as_array().unwrap().len(), 26);
    assert_eq!(json["top3"].as_array().unwrap().len(), 3);
    assert_eq!(json["top3"][0]["percent"], 50);
}

#[tokio::test]
async fn test_score_rejects_out_of_range_answer() {
    let body = json!({ "answers": { "s1-01": 5 } });
    let (status, _) = post("/score/stage1", body).await;
    assert!(status.is_client_error());
}
