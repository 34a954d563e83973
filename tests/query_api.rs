//! `GET /data` contract, exercised through the router with `tower::ServiceExt`.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt as _;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt as _;
use well_production::{
    db::ProductionStore, model::database::NewAnnualProduction, route::router,
};

async fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let database = dir.path().join("production.db");
    let store = ProductionStore::open(database.to_str().unwrap(), 2)
        .await
        .unwrap();

    store
        .replace_all(vec![NewAnnualProduction {
            api_well_number: "42-001-12345".to_owned(),
            oil: 100,
            gas: 200,
            brine: 300,
        }])
        .await
        .unwrap();

    (dir, router(store, Duration::from_secs(5)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_found() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/data?well=42-001-12345").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"oil": 100, "gas": 200, "brine": 300})
    );
}

#[tokio::test]
async fn test_missing_well_parameter() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/data").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body), json!({"error": "Well number is required"}));
}

#[tokio::test]
async fn test_empty_well_parameter() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/data?well=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body), json!({"error": "Well number is required"}));
}

#[tokio::test]
async fn test_unknown_well() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/data?well=UNKNOWN123").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(&body),
        json!({"error": "No data found for API WELL NUMBER UNKNOWN123"})
    );
}

#[tokio::test]
async fn test_repeated_well_parameter_uses_first_value() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/data?well=42-001-12345&well=x").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"oil": 100, "gas": 200, "brine": 300})
    );
}

#[tokio::test]
async fn test_repeated_well_parameter_with_unknown_first_value() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/data?well=x&well=42-001-12345").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(&body),
        json!({"error": "No data found for API WELL NUMBER x"})
    );
}

#[tokio::test]
async fn test_well_match_is_exact() {
    let (_dir, app) = test_app().await;

    let (status, _) = get(app, "/data?well=42-001-12345%20").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(app, "/wells").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}
