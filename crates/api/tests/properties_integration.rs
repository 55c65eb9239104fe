//! Integration tests for public property listings and inquiries.
//!
//! These tests require a running PostgreSQL instance.
//! Set TEST_DATABASE_URL environment variable or use docker-compose.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_admin_user, create_test_app, create_test_pool, get_request, json_request,
    json_request_with_auth, parse_response_body, run_migrations, test_config, TestUser,
};
use serde_json::json;

/// Create a property through the admin API and return its (id, slug).
async fn seed_property(
    app: &axum::Router,
    admin_token: &str,
    title: &str,
    price: i64,
    bedrooms: i32,
    bathrooms: f64,
) -> (String, String) {
    let response = json_request_with_auth(
        app,
        Method::POST,
        "/api/v1/admin/properties",
        admin_token,
        json!({
            "title": title,
            "description": "A remarkable residence.",
            "price": price,
            "image_url": "https://cdn.example.com/home.jpg",
            "address": "42 Seaside Boulevard",
            "bedrooms": bedrooms,
            "bathrooms": bathrooms,
            "square_feet": 6200,
            "features": "pool, home theater"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    (
        body["id"].as_str().unwrap().to_string(),
        body["slug"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_get_property_by_slug() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let title = format!("Hillside Manor {}", unique);
    let (_, slug) = seed_property(&app, &admin.access_token, &title, 4_800_000, 5, 4.5).await;

    let response = get_request(&app, &format!("/api/v1/properties/{}", slug)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["title"], title);
    assert_eq!(body["price"], 4_800_000);
    assert_eq!(body["bathrooms"], 4.5);
    assert_eq!(body["features"], json!(["pool", "home theater"]));
}

#[tokio::test]
async fn test_get_property_unknown_slug_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = get_request(&app, "/api/v1/properties/no-such-listing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_properties_applies_filters() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let (big_id, _) = seed_property(
        &app,
        &admin.access_token,
        &format!("Grand Estate {}", unique),
        9_000_000,
        7,
        6.0,
    )
    .await;
    seed_property(
        &app,
        &admin.access_token,
        &format!("City Loft {}", unique),
        1_200_000,
        2,
        2.0,
    )
    .await;

    let response = get_request(
        &app,
        "/api/v1/properties?min_price=5000000&min_bedrooms=5&min_bathrooms=4.5",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let listings = body.as_array().unwrap();
    assert!(listings.iter().any(|p| p["id"] == big_id.as_str()));
    assert!(listings.iter().all(|p| p["price"].as_i64().unwrap() >= 5_000_000));
    assert!(listings.iter().all(|p| p["bedrooms"].as_i64().unwrap() >= 5));
}

#[tokio::test]
async fn test_list_properties_sorted_by_price_descending() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    seed_property(
        &app,
        &admin.access_token,
        &format!("Modest Villa {}", unique),
        2_000_000,
        3,
        2.5,
    )
    .await;
    seed_property(
        &app,
        &admin.access_token,
        &format!("Flagship Villa {}", unique),
        15_000_000,
        8,
        9.0,
    )
    .await;

    let body = parse_response_body(get_request(&app, "/api/v1/properties").await).await;
    let prices: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_i64().unwrap())
        .collect();
    let mut sorted = prices.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(prices, sorted);
}

// ============================================================================
// Inquiry Tests
// ============================================================================

#[tokio::test]
async fn test_create_inquiry_success() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let title = format!("Inquiry Target {}", unique);
    let (id, _) = seed_property(&app, &admin.access_token, &title, 3_000_000, 4, 3.0).await;

    let response = json_request(
        &app,
        Method::POST,
        &format!("/api/v1/properties/{}/inquiries", id),
        json!({
            "name": "  Ada Buyer  ",
            "email": "ada@example.com",
            "phone": "+1 (555) 010-2030",
            "message": "Is a private viewing possible next week?"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["name"], "Ada Buyer");
    assert_eq!(body["property_title"], title);
}

#[tokio::test]
async fn test_create_inquiry_unknown_property_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());

    let response = json_request(
        &app,
        Method::POST,
        &format!("/api/v1/properties/{}/inquiries", uuid::Uuid::new_v4()),
        json!({
            "name": "Ada Buyer",
            "email": "ada@example.com",
            "phone": "5550102030",
            "message": "Hello?"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_inquiry_invalid_phone_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let admin = create_admin_user(&app, &pool, &TestUser::new()).await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let (id, _) = seed_property(
        &app,
        &admin.access_token,
        &format!("Strict Listing {}", unique),
        3_000_000,
        4,
        3.0,
    )
    .await;

    let response = json_request(
        &app,
        Method::POST,
        &format!("/api/v1/properties/{}/inquiries", id),
        json!({
            "name": "Ada Buyer",
            "email": "ada@example.com",
            "phone": "call-me",
            "message": "Hello?"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"]
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d["field"] == "phone"));
}
