//! End-to-end tests for the category endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The API server running against it (cargo run -p jurassic-api)

use reqwest::StatusCode;
use serde_json::{Value, json};

use jurassic_integration_tests::TestContext;

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_list_categories_on_empty_store() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/categorias"))
        .send()
        .await
        .expect("Failed to list categories");
    let status = resp.status();
    let body: Value = resp.json().await.expect("Response is not JSON");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_add_then_list_categories() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/categorias-add"))
        .json(&json!({"name": "Fossils"}))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = resp.json().await.expect("Response is not JSON");
    assert_eq!(created["message"], "Categoria inserida com sucesso");

    let list: Value = ctx
        .client
        .get(ctx.url("/api/categorias"))
        .send()
        .await
        .expect("Failed to list categories")
        .json()
        .await
        .expect("Response is not JSON");
    assert_eq!(list, json!([{"id": created["id"], "name": "Fossils"}]));
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_add_category_without_name() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/categorias-add"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send create request");
    let status = resp.status();
    let body: Value = resp.json().await.expect("Response is not JSON");

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Campo name é obrigatório"}));
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_readiness_reports_database() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/health/ready"))
        .send()
        .await
        .expect("Failed to send readiness probe");

    assert_eq!(resp.status(), StatusCode::OK);
}
