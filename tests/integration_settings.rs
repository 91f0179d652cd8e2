mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, get_as, json_request_as, setting, setup_test_app};

#[tokio::test]
async fn test_approvals_fall_back_to_configured_defaults() {
    let (app, _store) = setup_test_app(vec![], Duration::from_secs(60));

    let response = app.oneshot(get("/api/settings/approvals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["invoice_threshold"], json!(25000.0));
    assert_eq!(body["data"]["transfer_threshold"], json!(50000.0));
    assert_eq!(body["data"]["discount_limit_percent"], json!(10.0));
}

#[tokio::test]
async fn test_alerts_resolve_from_store_over_defaults() {
    let (app, _store) = setup_test_app(
        vec![setting("ALERTS", "lowStockThreshold", "25")],
        Duration::from_secs(60),
    );

    let response = app.oneshot(get("/api/settings/alerts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["low_stock_threshold"], json!(25.0));
    // Untouched keys keep their fallbacks.
    assert_eq!(body["data"]["overdue_invoice_days"], json!(30.0));
}

#[tokio::test]
async fn test_settings_list_requires_role_header() {
    let (app, _store) = setup_test_app(vec![], Duration::from_secs(60));

    let response = app.oneshot(get("/api/settings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_settings_list_rejects_non_admin_role() {
    let (app, _store) = setup_test_app(vec![], Duration::from_secs(60));

    let response = app.oneshot(get_as("/api/settings", "staff")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_upserts_and_lists_settings() {
    let (app, store) = setup_test_app(vec![], Duration::from_secs(60));

    let response = app
        .clone()
        .oneshot(json_request_as(
            "PUT",
            "/api/settings",
            "admin",
            &json!({
                "category": "APPROVALS",
                "key": "invoiceThreshold",
                "value": "30000"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["value"], json!("30000"));

    // The list view reads the store directly, so the write is visible at once.
    let response = app.oneshot(get_as("/api/settings", "admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"][0]["key"], json!("invoiceThreshold"));
    assert_eq!(body["data"][0]["value"], json!("30000"));

    // One load from the list endpoint only; no snapshot reload happened.
    assert_eq!(store.loads(), 1);
}

#[tokio::test]
async fn test_upsert_rejects_blank_category() {
    let (app, _store) = setup_test_app(vec![], Duration::from_secs(60));

    let response = app
        .oneshot(json_request_as(
            "PUT",
            "/api/settings",
            "admin",
            &json!({ "category": "", "key": "k", "value": "v" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_threshold_write_visible_only_after_ttl() {
    let (app, _store) = setup_test_app(
        vec![setting("APPROVALS", "invoiceThreshold", "25000")],
        Duration::from_millis(50),
    );

    let response = app
        .clone()
        .oneshot(get("/api/settings/approvals"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["invoice_threshold"], json!(25000.0));

    let response = app
        .clone()
        .oneshot(json_request_as(
            "PUT",
            "/api/settings",
            "admin",
            &json!({
                "category": "APPROVALS",
                "key": "invoiceThreshold",
                "value": "30000"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Within the snapshot TTL the old value still answers.
    let response = app
        .clone()
        .oneshot(get("/api/settings/approvals"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["invoice_threshold"], json!(25000.0));

    tokio::time::sleep(Duration::from_millis(80)).await;

    let response = app.oneshot(get("/api/settings/approvals")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["invoice_threshold"], json!(30000.0));
}
