use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

use toxicity_shield_ml::{
    AppState, routes::create_router, scorer::StubScorer, services::AnalysisService,
};

fn app() -> Router {
    let analysis_service = AnalysisService::new(Arc::new(StubScorer::new()));
    create_router(AppState { analysis_service })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn assert_zero_score(score: &Value) {
    let fields = [
        "toxic",
        "severe_toxic",
        "obscene",
        "threat",
        "insult",
        "identity_attack",
    ];
    let obj = score.as_object().expect("score should be an object");
    assert_eq!(obj.len(), fields.len(), "unexpected score fields: {score}");
    for field in fields {
        assert_eq!(score[field], 0.0, "field {field} should be 0.0 in {score}");
    }
}

#[tokio::test]
async fn health_reports_ok_without_model() {
    let (status, body) = get(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn analyze_returns_one_zero_score_per_text() {
    let request = json!({"texts": ["hello", "you are terrible"]});
    let (status, body) = post_json(app(), "/analyze", request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results should be a list");
    assert_eq!(results.len(), 2);
    for score in results {
        assert_zero_score(score);
    }
}

#[tokio::test]
async fn analyze_empty_texts_returns_empty_results() {
    let (status, body) = post_json(app(), "/analyze", json!({"texts": []}).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn analyze_result_count_matches_large_batch() {
    let texts: Vec<String> = (0..50).map(|i| format!("text {i}")).collect();
    let (status, body) = post_json(app(), "/analyze", json!({"texts": texts}).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn analyze_rejects_non_list_texts() {
    let (status, _) =
        post_json(app(), "/analyze", json!({"texts": "not a list"}).to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_rejects_missing_texts_field() {
    let (status, _) = post_json(app(), "/analyze", json!({"messages": []}).to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_rejects_malformed_json() {
    let (status, _) = post_json(app(), "/analyze", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_model_loaded_stays_false_after_analyze() {
    let app = app();

    let (status, _) = post_json(
        app.clone(),
        "/analyze",
        json!({"texts": ["hello"]}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_loaded"], false);
}
