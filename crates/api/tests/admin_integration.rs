//! Integration tests for the admin console: access control, content CRUD,
//! lead management, and the dashboard.
//!
//! These tests require a running PostgreSQL instance.
//! Set TEST_DATABASE_URL environment variable or use docker-compose.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_admin_user, create_authenticated_user, create_test_app, create_test_pool,
    delete_request_with_auth, get_request, get_request_with_auth, json_request,
    json_request_with_auth, parse_response_body, run_migrations, test_config, TestUser,
};
use serde_json::json;

fn post_payload(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "excerpt": "Excerpt.",
        "content": "<p>Body.</p>",
        "image_url": "https://cdn.example.com/p.jpg",
        "tags": "one, two"
    })
}

fn property_payload(title: &str, price: i64) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Description.",
        "price": price,
        "image_url": "https://cdn.example.com/h.jpg",
        "address": "1 Test Lane",
        "bedrooms": 4,
        "bathrooms": 3.5,
        "square_feet": 5000,
        "features": "pool"
    })
}

async fn seed_message(app: &axum::Router, marker: &str) -> String {
    let response = json_request(
        app,
        Method::POST,
        "/api/v1/contact",
        json!({
            "name": format!("Lead {}", marker),
            "email": "lead@example.com",
            "phone": "5550001111",
            "property_type": "Villa",
            "message": format!("Interested, ref {}", marker)
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

// ============================================================================
// Access Control
// ============================================================================

#[tokio::test]
async fn test_admin_routes_require_token() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = get_request(&app, "/api/v1/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_reject_regular_users() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let auth = create_authenticated_user(&app, &TestUser::new()).await;

    let response = get_request_with_auth(&app, "/api/v1/admin/dashboard", &auth.access_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn test_admin_routes_reject_garbage_token() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = get_request_with_auth(&app, "/api/v1/admin/messages", "bogus-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Blog Post Management
// ============================================================================

#[tokio::test]
async fn test_admin_blog_crud_lifecycle() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let title = format!("Lifecycle Post {}", unique);

    // Create
    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/blog/posts",
        &admin.access_token,
        post_payload(&title),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    let created_at = created["created_at"].as_str().unwrap().to_string();
    assert_eq!(created["author_name"], "Test User");

    // Update changes updated_at, preserves created_at and authorship
    let updated_title = format!("Lifecycle Post Updated {}", unique);
    let response = json_request_with_auth(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/blog/posts/{}", id),
        &admin.access_token,
        post_payload(&updated_title),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_response_body(response).await;
    assert_eq!(updated["title"], updated_title);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["created_at"], created_at);
    assert_ne!(updated["updated_at"], updated["created_at"]);
    assert_eq!(updated["author_name"], "Test User");

    // Delete
    let response = delete_request_with_auth(
        &app,
        &format!("/api/v1/admin/blog/posts/{}", id),
        &admin.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone from the public site
    let response = get_request(
        &app,
        &format!("/api/v1/blog/posts/{}", updated["slug"].as_str().unwrap()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_blog_update_unknown_id_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let response = json_request_with_auth(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/blog/posts/{}", uuid::Uuid::new_v4()),
        &admin.access_token,
        post_payload("Ghost Post"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_blog_create_strips_scripts() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let mut payload = post_payload(&format!("Sanitized Post {}", unique));
    payload["content"] = json!("<p>ok</p><script>alert(1)</script>");

    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/blog/posts",
        &admin.access_token,
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    let content = body["content"].as_str().unwrap();
    assert!(!content.contains("<script"));
    assert!(content.contains("<p>ok</p>"));
}

#[tokio::test]
async fn test_admin_blog_duplicate_slug_conflicts() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let payload = post_payload(&format!("Duplicate Slug {}", unique));

    let first = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/blog/posts",
        &admin.access_token,
        payload.clone(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/blog/posts",
        &admin.access_token,
        payload,
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

// ============================================================================
// Property Management
// ============================================================================

#[tokio::test]
async fn test_admin_property_crud_lifecycle() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let title = format!("Lifecycle Estate {}", unique);

    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/properties",
        &admin.access_token,
        property_payload(&title, 5_000_000),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = json_request_with_auth(
        &app,
        Method::PUT,
        &format!("/api/v1/admin/properties/{}", id),
        &admin.access_token,
        property_payload(&title, 4_750_000),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_response_body(response).await;
    assert_eq!(updated["price"], 4_750_000);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["created_at"], created["created_at"]);

    let response = delete_request_with_auth(
        &app,
        &format!("/api/v1/admin/properties/{}", id),
        &admin.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_request_with_auth(
        &app,
        &format!("/api/v1/admin/properties/{}", id),
        &admin.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_property_negative_price_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/properties",
        &admin.access_token,
        property_payload("Bad Price Estate", -100),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Contact Message Management
// ============================================================================

#[tokio::test]
async fn test_admin_messages_search_and_status_filter() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let marker = uuid::Uuid::new_v4().simple().to_string();
    let id_a = seed_message(&app, &marker).await;
    seed_message(&app, &marker).await;

    // Search narrows to the marker
    let response = get_request_with_auth(
        &app,
        &format!("/api/v1/admin/messages?search={}", marker),
        &admin.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Mark one read, then filter by status
    let response = json_request_with_auth(
        &app,
        Method::POST,
        &format!("/api/v1/admin/messages/{}/read", id_a),
        &admin.access_token,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_request_with_auth(
        &app,
        &format!("/api/v1/admin/messages?search={}&status=unread", marker),
        &admin.access_token,
    )
    .await;
    let unread = parse_response_body(response).await;
    assert_eq!(unread.as_array().unwrap().len(), 1);

    let response = get_request_with_auth(
        &app,
        &format!("/api/v1/admin/messages?search={}&status=read", marker),
        &admin.access_token,
    )
    .await;
    let read = parse_response_body(response).await;
    assert_eq!(read.as_array().unwrap().len(), 1);
    assert_eq!(read[0]["id"], id_a.as_str());
}

#[tokio::test]
async fn test_admin_mark_read_is_idempotent() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let marker = uuid::Uuid::new_v4().simple().to_string();
    let id = seed_message(&app, &marker).await;

    for _ in 0..2 {
        let response = json_request_with_auth(
            &app,
            Method::POST,
            &format!("/api/v1/admin/messages/{}/read", id),
            &admin.access_token,
            json!({}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_response_body(response).await;
        assert_eq!(body["read"], true);
    }

    // And back to unread
    let response = json_request_with_auth(
        &app,
        Method::POST,
        &format!("/api/v1/admin/messages/{}/unread", id),
        &admin.access_token,
        json!({}),
    )
    .await;
    let body = parse_response_body(response).await;
    assert_eq!(body["read"], false);
}

#[tokio::test]
async fn test_admin_bulk_message_operations_report_affected_rows() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let marker = uuid::Uuid::new_v4().simple().to_string();
    let id_a = seed_message(&app, &marker).await;
    let id_b = seed_message(&app, &marker).await;
    let missing = uuid::Uuid::new_v4().to_string();

    // Unknown ids are skipped, not errors
    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/messages/bulk/read",
        &admin.access_token,
        json!({ "ids": [id_a, id_b, missing] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["affected"], 2);

    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/messages/bulk/delete",
        &admin.access_token,
        json!({ "ids": [id_a, id_b] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["affected"], 2);

    // Deleting again affects nothing
    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/messages/bulk/delete",
        &admin.access_token,
        json!({ "ids": [id_a, id_b] }),
    )
    .await;
    let body = parse_response_body(response).await;
    assert_eq!(body["affected"], 0);
}

// ============================================================================
// Inquiry Management
// ============================================================================

#[tokio::test]
async fn test_admin_inquiries_list_and_bulk_delete() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let title = format!("Inquiry Estate {}", unique);
    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/properties",
        &admin.access_token,
        property_payload(&title, 2_000_000),
    )
    .await;
    let property_id = parse_response_body(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = json_request(
        &app,
        Method::POST,
        &format!("/api/v1/properties/{}/inquiries", property_id),
        json!({
            "name": "Niels Buyer",
            "email": "niels@example.com",
            "phone": "5552223333",
            "message": "Still available?"
        }),
    )
    .await;
    let inquiry_id = parse_response_body(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Listed with the property title resolved
    let response = get_request_with_auth(&app, "/api/v1/admin/inquiries", &admin.access_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let entry = body
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == inquiry_id.as_str())
        .expect("inquiry should be listed");
    assert_eq!(entry["property_title"], title);

    let response = json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/inquiries/bulk/delete",
        &admin.access_token,
        json!({ "ids": [inquiry_id] }),
    )
    .await;
    let body = parse_response_body(response).await;
    assert_eq!(body["affected"], 1);
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_admin_dashboard_counts() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let before = parse_response_body(
        get_request_with_auth(&app, "/api/v1/admin/dashboard", &admin.access_token).await,
    )
    .await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/blog/posts",
        &admin.access_token,
        post_payload(&format!("Dashboard Post {}", unique)),
    )
    .await;
    json_request_with_auth(
        &app,
        Method::POST,
        "/api/v1/admin/properties",
        &admin.access_token,
        property_payload(&format!("Dashboard Estate {}", unique), 1_000_000),
    )
    .await;
    seed_message(&app, &unique).await;
    json_request(
        &app,
        Method::POST,
        "/api/v1/newsletter",
        json!({ "email": common::unique_test_email() }),
    )
    .await;

    let response = get_request_with_auth(&app, "/api/v1/admin/dashboard", &admin.access_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let after = parse_response_body(response).await;
    let delta = |field: &str| after[field].as_i64().unwrap() - before[field].as_i64().unwrap();
    assert_eq!(delta("blog_posts"), 1);
    assert_eq!(delta("properties"), 1);
    assert_eq!(delta("contact_messages"), 1);
    assert_eq!(delta("unread_messages"), 1);
    assert_eq!(delta("newsletter_subscribers"), 1);
    assert_eq!(delta("property_inquiries"), 0);
}
