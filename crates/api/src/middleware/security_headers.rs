//! Baseline security response headers.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// HSTS must only be sent when HTTPS termination is actually in place,
/// so it is gated on an explicit environment flag rather than config.
const HSTS_ENV_FLAG: &str = "VM__SECURITY__HSTS_ENABLED";

/// Adds `X-Content-Type-Options`, `X-Frame-Options`, and
/// `X-XSS-Protection` to every response, plus `Strict-Transport-Security`
/// when the deployment opts in.
pub async fn security_headers_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        header::HeaderName::from_static("x-xss-protection"),
        HeaderValue::from_static("1; mode=block"),
    );

    if hsts_enabled() {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}

fn hsts_enabled() -> bool {
    std::env::var(HSTS_ENV_FLAG)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
