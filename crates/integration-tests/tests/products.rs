//! End-to-end tests for the product endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The API server running against it (cargo run -p jurassic-api)

use reqwest::StatusCode;
use serde_json::{Value, json};

use jurassic_integration_tests::TestContext;

async fn get_json(ctx: &TestContext, path: &str) -> (StatusCode, Value) {
    let resp = ctx
        .client
        .get(ctx.url(path))
        .send()
        .await
        .expect("Failed to send request");
    let status = resp.status();
    (status, resp.json().await.expect("Response is not JSON"))
}

async fn add_product(ctx: &TestContext, body: &Value) -> (StatusCode, Value) {
    let resp = ctx
        .client
        .post(ctx.url("/api/produtos-add"))
        .json(body)
        .send()
        .await
        .expect("Failed to send create request");
    let status = resp.status();
    (status, resp.json().await.expect("Response is not JSON"))
}

fn raptor_claw() -> Value {
    json!({
        "name": "Raptor Claw",
        "price": "19.99",
        "description": "Fossil replica",
        "category": "Fossils"
    })
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_list_on_empty_store() {
    let ctx = TestContext::new().await;

    let (status, body) = get_json(&ctx, "/api/produtos").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_create_then_fetch_product() {
    let ctx = TestContext::new().await;
    ctx.insert_category("Dinosaurs").await;
    ctx.insert_category("Minerals").await;
    let fossils = ctx.insert_category("Fossils").await;
    assert_eq!(fossils.as_i32(), 3);

    let (status, body) = add_product(&ctx, &raptor_claw()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product inserted successfully");
    let id = body["id"].as_i64().expect("id should be a number");

    let (status, product) = get_json(&ctx, &format!("/api/produtos/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["name"], "Raptor Claw");
    assert_eq!(product["price"], "19.99");
    assert_eq!(product["category_id"], 3);
    assert_eq!(product["image"], Value::Null);

    let (_, list) = get_json(&ctx, "/api/produtos").await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_get_missing_product_is_not_found() {
    let ctx = TestContext::new().await;

    let (status, body) = get_json(&ctx, "/api/produtos/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Produto não encontrado");

    let (status, _) = get_json(&ctx, "/api/produtos/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_create_with_unknown_category_inserts_nothing() {
    let ctx = TestContext::new().await;
    ctx.insert_category("Minerals").await;

    let (status, body) = add_product(&ctx, &raptor_claw()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
    assert_eq!(ctx.product_count().await, 0);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_create_rejects_invalid_input_before_lookup() {
    let ctx = TestContext::new().await;
    ctx.insert_category("Fossils").await;

    let mut missing = raptor_claw();
    missing["description"] = Value::Null;
    let (status, _) = add_product(&ctx, &missing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_price = raptor_claw();
    bad_price["price"] = json!("abc");
    let (status, body) = add_product(&ctx, &bad_price).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Fields price must be numbers");

    assert_eq!(ctx.product_count().await, 0);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_update_availability() {
    let ctx = TestContext::new().await;
    ctx.insert_category("Fossils").await;
    let (_, created) = add_product(&ctx, &raptor_claw()).await;
    let id = created["id"].as_i64().expect("id should be a number");

    let resp = ctx
        .client
        .patch(ctx.url(&format!("/api/produtos/{id}")))
        .json(&json!({"availability": false}))
        .send()
        .await
        .expect("Failed to send patch");
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, product) = get_json(&ctx, &format!("/api/produtos/{id}")).await;
    assert_eq!(product["availability"], false);

    let resp = ctx
        .client
        .patch(ctx.url(&format!("/api/produtos/{id}")))
        .json(&json!({"availability": 1}))
        .send()
        .await
        .expect("Failed to send patch");
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, product) = get_json(&ctx, &format!("/api/produtos/{id}")).await;
    assert_eq!(product["availability"], true);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_update_availability_with_unparseable_id_changes_nothing() {
    let ctx = TestContext::new().await;
    ctx.insert_category("Fossils").await;
    let (_, created) = add_product(&ctx, &raptor_claw()).await;
    let id = created["id"].as_i64().expect("id should be a number");

    let resp = ctx
        .client
        .patch(ctx.url("/api/produtos/abc"))
        .json(&json!({"availability": false}))
        .send()
        .await
        .expect("Failed to send patch");
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, product) = get_json(&ctx, &format!("/api/produtos/{id}")).await;
    assert_eq!(product["availability"], Value::Null);
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_update_availability_of_missing_product_succeeds() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .patch(ctx.url("/api/produtos/42"))
        .json(&json!({"availability": false}))
        .send()
        .await
        .expect("Failed to send patch");
    let status = resp.status();
    let body: Value = resp.json().await.expect("Response is not JSON");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Disponibilidade atualizada com sucesso");
}
