use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use shopledger::db;
use shopledger::infrastructure::AppState;
use shopledger::models::inventory;
use shopledger::{api, server};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app over an in-memory database
async fn setup_test_app() -> (Router, DatabaseConnection) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    (api::api_router(AppState::new(db.clone())), db)
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_update_unknown_inventory_is_not_found() {
    let (app, db) = setup_test_app().await;

    let now = db::now_timestamp();
    let existing = inventory::ActiveModel {
        quantity: Set(7),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("Failed to create inventory");

    let (status, body) = call(&app, "PUT", "/inventory/999?quantity=3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Inventory not found");

    // Nothing was touched
    let rows = inventory::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 7);
    assert_eq!(rows[0].updated_at, existing.updated_at);
}

#[tokio::test]
async fn test_update_inventory_id_mismatch() {
    let (app, db) = setup_test_app().await;

    let now = db::now_timestamp();
    inventory::ActiveModel {
        quantity: Set(7),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("Failed to create inventory");

    let (status, body) = call(&app, "PUT", "/inventory/1?id=2&quantity=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("does not match"));

    let row = inventory::Entity::find_by_id(1).one(&db).await.unwrap().unwrap();
    assert_eq!(row.quantity, 7);
}

#[tokio::test]
async fn test_duplicate_product_name_is_server_error() {
    let (app, db) = setup_test_app().await;

    let (status, _) = call(&app, "POST", "/post/product?name=Widget&price=100").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, "POST", "/post/product?name=Widget&price=120").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("UNIQUE"));

    let count = shopledger::models::product::Entity::find()
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_unknown_foreign_key_is_server_error() {
    let (app, _db) = setup_test_app().await;

    let (status, body) = call(&app, "POST", "/post/sale?quantity=1&product_id=424242").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("FOREIGN KEY"));
}

#[tokio::test]
async fn test_non_numeric_ids_are_rejected() {
    let (app, _db) = setup_test_app().await;

    let (status, _) = call(&app, "GET", "/sales/product/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "GET", "/revenue/category/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "PUT", "/inventory/abc?quantity=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "POST", "/post/product?price=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_router_serves_docs_and_api() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let app = server::build_router(db, &[]);

    let (status, doc) = call(&app, "GET", "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/inventory/low/stocks"].is_object());

    let (status, body) = call(&app, "GET", "/inventory").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = call(&app, "GET", "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
