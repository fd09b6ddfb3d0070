//! Handler tests for the Items domain
//!
//! Drive `handlers::router` directly with `oneshot`:
//! - Status codes per route
//! - JSON request and response bodies
//! - Error envelopes for bad ids, invalid payloads and missing rows

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDatabase;
use tower::ServiceExt;

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> Router {
    handlers::router(ItemService::new(SqlItemRepository::new(db.connection())))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Item {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_item_returns_201() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let item = create(&app, json!({"name": "Widget", "price": 9.99, "quantity": 5})).await;

    assert_eq!(item.name, "Widget");
    assert_eq!(item.quantity, 5);
    assert!(item.is_active);
    assert_eq!(item.description, None);
    assert_eq!(item.updated_at, None);
}

#[tokio::test]
async fn test_create_item_rejects_negative_price() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", json!({"name": "X", "price": -1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["price"].is_array());

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_create_item_missing_price_is_rejected() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(json_request("POST", "/", json!({"name": "Widget"})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_get_item_handler() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, json!({"name": "Widget", "price": 9.99})).await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, created);

    let response = app.oneshot(empty_request("GET", "/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Item 9999 not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let db = TestDatabase::new().await;

    let response = app(&db)
        .oneshot(empty_request("GET", "/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_ids_outside_key_range_are_not_found() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(&app, json!({"name": "Widget", "price": 9.99})).await;

    for uri in ["/3000000000", "/-3000000000", "/99999999999999999999"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/3000000000", json!({"price": 1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(empty_request("PATCH", "/3000000000/deactivate"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/3000000000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Item 3000000000 not found");

    let response = app.oneshot(empty_request("GET", "/stats/summary")).await.unwrap();
    let stats: ItemStats = json_body(response.into_body()).await;
    assert_eq!(stats.total, 1);
}

#[tokio::test]
async fn test_put_and_patch_update_present_fields() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(
        &app,
        json!({"name": "Widget", "price": 9.99, "quantity": 5, "description": "blue"}),
    )
    .await;
    let uri = format!("/{}", created.id);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({"price": 12.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Item = json_body(response.into_body()).await;
    assert_eq!(updated.price, 12.5);
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.description.as_deref(), Some("blue"));
    assert!(updated.updated_at.is_some());

    let response = app
        .oneshot(json_request("PATCH", &uri, json!({"description": null})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched: Item = json_body(response.into_body()).await;
    assert_eq!(patched.description, None);
    assert_eq!(patched.price, 12.5);
}

#[tokio::test]
async fn test_update_validation_and_not_found() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, json!({"name": "Widget", "price": 9.99})).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({"quantity": -1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request("PUT", "/9999", json!({"price": 1.0})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_item_handler() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, json!({"name": "Widget", "price": 9.99})).await;
    let uri = format!("/{}", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: DeleteResponse = json_body(response.into_body()).await;
    assert!(!body.message.is_empty());

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deactivate_and_list_filters() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let first = create(&app, json!({"name": "First", "price": 1.0})).await;
    let second = create(&app, json!({"name": "Second", "price": 2.0})).await;

    let response = app
        .clone()
        .oneshot(empty_request("PATCH", &format!("/{}/deactivate", first.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deactivated: Item = json_body(response.into_body()).await;
    assert!(!deactivated.is_active);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?active_only=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let active: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(active.iter().map(|i| i.id).collect::<Vec<_>>(), vec![second.id]);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?skip=0&limit=1"))
        .await
        .unwrap();
    let page: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, first.id);

    let response = app
        .oneshot(empty_request("PATCH", "/9999/deactivate"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_rejects_out_of_range_limit() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for query in ["/?limit=0", "/?limit=1001", "/?skip=-1"] {
        let response = app.clone().oneshot(empty_request("GET", query)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", query);
    }
}

#[tokio::test]
async fn test_list_skip_past_i64_is_empty() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    create(&app, json!({"name": "Widget", "price": 9.99})).await;

    for query in [
        "/?skip=9223372036854775807",
        "/?skip=9223372036854775808",
        "/?skip=18446744073709551615&active_only=true",
    ] {
        let response = app.clone().oneshot(empty_request("GET", query)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", query);
        let items: Vec<Item> = json_body(response.into_body()).await;
        assert!(items.is_empty(), "{}", query);
    }
}

#[tokio::test]
async fn test_stats_summary() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let first = create(&app, json!({"name": "First", "price": 1.0})).await;
    create(&app, json!({"name": "Second", "price": 2.0, "is_active": false})).await;
    create(&app, json!({"name": "Third", "price": 3.0})).await;

    app.clone()
        .oneshot(empty_request("PATCH", &format!("/{}/deactivate", first.id)))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/stats/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats: ItemStats = json_body(response.into_body()).await;
    assert_eq!(
        stats,
        ItemStats {
            total: 3,
            active: 1,
            inactive: 2,
        }
    );
}
