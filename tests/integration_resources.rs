mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{body_json, get, json_request, json_request_as, setup_test_app_with_pool};

async fn create_contact(app: &axum::Router, name: &str, email: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/contacts",
            &json!({ "name": name, "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn test_contact_crud_roundtrip(pool: PgPool) {
    let app = setup_test_app_with_pool(pool);

    let created = create_contact(&app, "Samir Farouk", "samir@example.com").await;
    assert_eq!(created["success"], json!(true));
    assert_eq!(created["data"]["status"], json!("active"));
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/contacts/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/contacts/{id}"),
            &json!({ "company": "Golden Horse" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["company"], json!("Golden Horse"));
    // Untouched fields survive the partial update.
    assert_eq!(body["data"]["name"], json!("Samir Farouk"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/contacts/{id}"))
                .header("x-user-role", "admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get(&format!("/api/contacts/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_contact_email_is_rejected(pool: PgPool) {
    let app = setup_test_app_with_pool(pool);

    create_contact(&app, "First", "dup@example.com").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/contacts",
            &json!({ "name": "Second", "email": "dup@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn test_contact_search_and_pagination(pool: PgPool) {
    let app = setup_test_app_with_pool(pool);

    for i in 0..25 {
        create_contact(&app, &format!("Shipper {i}"), &format!("s{i}@example.com")).await;
    }
    create_contact(&app, "Unrelated", "other@example.com").await;

    // Free-text search matches name or email substrings, case-insensitive.
    let response = app
        .clone()
        .oneshot(get("/api/contacts?query=shipper"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], json!(25));
    assert_eq!(body["data"]["pagination"]["pages"], json!(3));
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 10);

    // A page number with trailing garbage parses from its leading digits.
    let response = app
        .clone()
        .oneshot(get("/api/contacts?query=shipper&page=2abc"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["pagination"]["page"], json!(2));

    let response = app
        .oneshot(get("/api/contacts?query=shipper&page=3&limit=10"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 5);
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn test_ticket_lifecycle_and_filters(pool: PgPool) {
    let app = setup_test_app_with_pool(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tickets",
            &json!({ "subject": "Container stuck at customs", "priority": "high" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["status"], json!("open"));
    let id = created["data"]["id"].as_str().unwrap().to_string();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/tickets",
            &json!({ "subject": "Invoice question" }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/tickets/{id}/status"),
            &json!({ "status": "resolved" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], json!("resolved"));

    // Equality filters AND together with the search term.
    let response = app
        .oneshot(get("/api/tickets?status=resolved&priority=high"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], json!(1));
    assert_eq!(body["data"]["items"][0]["id"], json!(id));
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn test_bank_transfer_amount_range_filter(pool: PgPool) {
    let app = setup_test_app_with_pool(pool);

    for (reference, amount) in [("TRX-1", 1000.0), ("TRX-2", 20000.0), ("TRX-3", 60000.0)] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/bank-transfers",
                &json!({ "reference": reference, "bank_name": "CIB", "amount": amount }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get("/api/bank-transfers?min_amount=5000&max_amount=50000"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], json!(1));
    assert_eq!(body["data"]["items"][0]["reference"], json!("TRX-2"));

    // An open-ended lower bound.
    let response = app
        .oneshot(get("/api/bank-transfers?min_amount=5000"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], json!(2));
}

#[ignore = "requires Postgres"]
#[sqlx::test(migrations = "./migrations")]
async fn test_security_logs_are_admin_read_only(pool: PgPool) {
    let app = setup_test_app_with_pool(pool);

    // Writes need an internal (staff) role.
    let payload = json!({ "actor": "gateway", "action": "login_failed", "level": "warn" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/security-logs", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(json_request_as("POST", "/api/security-logs", "staff", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.clone().oneshot(get("/api/security-logs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/security-logs?level=warn")
                .header("x-user-role", "admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], json!(1));
    assert_eq!(body["data"]["items"][0]["actor"], json!("gateway"));
}
