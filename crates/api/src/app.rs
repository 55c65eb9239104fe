use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, require_user, security_headers_middleware,
    trace_id,
};
use crate::routes::{
    admin_blog, admin_dashboard, admin_leads, admin_properties, auth, blog, health, leads,
    properties,
};
use crate::services::email::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub email: EmailService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);
    let email = EmailService::new(config.email.clone());

    let state = AppState {
        pool,
        config: config.clone(),
        email,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        // Blog (v1)
        .route("/api/v1/blog/posts", get(blog::list_posts))
        .route("/api/v1/blog/posts/:slug", get(blog::get_post))
        .route("/api/v1/blog/posts/:slug/related", get(blog::related_posts))
        .route("/api/v1/blog/posts/:slug/comments", get(blog::list_comments))
        .route("/api/v1/blog/categories", get(blog::list_categories))
        // Properties (v1)
        .route("/api/v1/properties", get(properties::list_properties))
        .route("/api/v1/properties/:slug", get(properties::get_property))
        .route(
            "/api/v1/properties/:id/inquiries",
            post(properties::create_inquiry),
        )
        // Lead capture (v1)
        .route("/api/v1/contact", post(leads::create_contact_message))
        .route("/api/v1/newsletter", post(leads::subscribe_newsletter))
        // Auth (v1)
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh));

    // Routes requiring a valid user token
    let user_routes = Router::new()
        .route(
            "/api/v1/blog/posts/:slug/comments",
            post(blog::create_comment),
        )
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    // Admin console routes (require admin role)
    let admin_routes = Router::new()
        .route("/api/v1/admin/dashboard", get(admin_dashboard::dashboard))
        // Blog management
        .route(
            "/api/v1/admin/blog/posts",
            get(admin_blog::list_posts).post(admin_blog::create_post),
        )
        .route(
            "/api/v1/admin/blog/posts/:id",
            put(admin_blog::update_post).delete(admin_blog::delete_post),
        )
        // Property management
        .route(
            "/api/v1/admin/properties",
            get(admin_properties::list_properties).post(admin_properties::create_property),
        )
        .route(
            "/api/v1/admin/properties/:id",
            put(admin_properties::update_property).delete(admin_properties::delete_property),
        )
        // Contact messages
        .route("/api/v1/admin/messages", get(admin_leads::list_messages))
        .route(
            "/api/v1/admin/messages/bulk/read",
            post(admin_leads::bulk_mark_read),
        )
        .route(
            "/api/v1/admin/messages/bulk/unread",
            post(admin_leads::bulk_mark_unread),
        )
        .route(
            "/api/v1/admin/messages/bulk/delete",
            post(admin_leads::bulk_delete_messages),
        )
        .route(
            "/api/v1/admin/messages/:id",
            delete(admin_leads::delete_message),
        )
        .route(
            "/api/v1/admin/messages/:id/read",
            post(admin_leads::mark_message_read),
        )
        .route(
            "/api/v1/admin/messages/:id/unread",
            post(admin_leads::mark_message_unread),
        )
        // Property inquiries
        .route("/api/v1/admin/inquiries", get(admin_leads::list_inquiries))
        .route(
            "/api/v1/admin/inquiries/bulk/delete",
            post(admin_leads::bulk_delete_inquiries),
        )
        .route(
            "/api/v1/admin/inquiries/:id",
            delete(admin_leads::delete_inquiry),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
