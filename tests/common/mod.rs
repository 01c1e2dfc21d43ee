#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        match serde_json::from_str(&self.body) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON body {:?}: {e}", self.body),
        }
    }
}

/// Run one request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b.to_owned())),
        None => builder.body(Body::empty()),
    };
    let req = match req {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let resp = match app.clone().oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    let status = resp.status();
    let bytes = match axum::body::to_bytes(resp.into_body(), 1024 * 1024).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body: {e}"),
    };
    TestResponse {
        status,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn create(app: &Router, name: &str, price: f64) -> serde_json::Value {
    let body = serde_json::json!({ "name": name, "price": price }).to_string();
    let resp = send(app, Method::POST, "/product", Some(&body)).await;
    assert_eq!(resp.status, StatusCode::CREATED, "create failed: {}", resp.body);
    resp.json()
}

/// The product contract shared by every store backend. Expects an empty table
/// whose id sequence starts at 1.
pub async fn empty_table_lists_as_empty_array(app: &Router) {
    let resp = send(app, Method::GET, "/products", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "[]");
}

pub async fn missing_product_is_404(app: &Router) {
    let resp = send(app, Method::GET, "/product/1", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json(), serde_json::json!({"error": "Product not found"}));
}

pub async fn create_assigns_first_id(app: &Router) {
    let resp = send(
        app,
        Method::POST,
        "/product",
        Some(r#"{"name":"test product", "price": 11.22}"#),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let body = resp.json();
    assert_eq!(body["name"], "test product");
    assert_eq!(body["price"], 11.22);
    assert_eq!(body["id"], 1);
}

pub async fn create_then_get_round_trips(app: &Router) {
    let created = create(app, "lamp", 19.99).await;
    let resp = send(app, Method::GET, &format!("/product/{}", created["id"]), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), created);
    assert_eq!(created["name"], "lamp");
    assert_eq!(created["price"], 19.99);
}

pub async fn update_replaces_fields(app: &Router) {
    let before = create(app, "test product", 11.22).await;
    assert_eq!(before["id"], 1);
    let resp = send(app, Method::PUT, "/product/1", Some(r#"{"name":"Product","price":55.00}"#)).await;
    assert_eq!(resp.status, StatusCode::OK);
    let after = resp.json();
    assert_eq!(after["id"], before["id"]);
    assert_ne!(after["name"], before["name"]);
    assert_ne!(after["price"], before["price"]);
    assert_eq!(after["name"], "Product");
    assert_eq!(after["price"], 55.0);

    let fetched = send(app, Method::GET, "/product/1", None).await;
    assert_eq!(fetched.json(), after);
}

pub async fn update_missing_is_404(app: &Router) {
    let resp = send(app, Method::PUT, "/product/42", Some(r#"{"name":"x","price":1}"#)).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["error"], "Product not found");
}

pub async fn delete_then_get_is_404_and_repeat_delete_is_404(app: &Router) {
    create(app, "test product", 11.22).await;
    let resp = send(app, Method::DELETE, "/product/1", None).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert!(resp.body.is_empty());

    let resp = send(app, Method::GET, "/product/1", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);

    let resp = send(app, Method::DELETE, "/product/1", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["error"], "Product not found");
}

pub async fn list_clamps_limit_and_offset(app: &Router) {
    for i in 0..12 {
        create(app, &format!("product {}", i), (i + 1) as f64 * 10.0).await;
    }
    let resp = send(app, Method::GET, "/products?offset=0&limit=0", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json().as_array().map(Vec::len), Some(10));

    let resp = send(app, Method::GET, "/products?offset=-4&limit=-1", None).await;
    let items = resp.json();
    assert_eq!(items.as_array().map(Vec::len), Some(10));
    assert_eq!(items[0]["id"], 1);

    let resp = send(app, Method::GET, "/products?offset=10&limit=5", None).await;
    let ids: Vec<i64> = resp
        .json()
        .as_array()
        .map(|a| a.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![11, 12]);

    let resp = send(app, Method::GET, "/products?offset=50", None).await;
    assert_eq!(resp.body, "[]");
}

pub async fn invalid_input_is_400(app: &Router) {
    create(app, "n", 0.0).await;
    for uri in ["/product/abc", "/product/%20%201", "/product/1%20", "/product/%FF"] {
        let resp = send(app, Method::GET, uri, None).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert!(resp.json()["error"].is_string(), "uri {}", uri);
    }

    for body in [
        r#"{"price": 1.5}"#,
        r#"{"name": "x", "price": "cheap"}"#,
        r#"{"name": "", "price": 1}"#,
        r#"{"name": "x", "price": 1.005}"#,
        r#"{"name": "x", "price": null}"#,
        r#"{"name": "x""#,
    ] {
        let resp = send(app, Method::POST, "/product", Some(body)).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "body {}", body);
        assert!(resp.json()["error"].is_string(), "body {}", body);
    }

    let resp = send(app, Method::PUT, "/product/x1", Some(r#"{"name":"x"}"#)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let resp = send(app, Method::DELETE, "/product/1.0", None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let resp = send(app, Method::DELETE, "/product/%FF", None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.json()["error"].is_string());

    // only the seeded row reached the store, untouched
    let resp = send(app, Method::GET, "/products", None).await;
    let items = resp.json();
    assert_eq!(items.as_array().map(Vec::len), Some(1));
    assert_eq!(items[0]["name"], "n");
}
