//! JWT authentication middleware.
//!
//! `require_user` gates routes behind a valid Bearer access token;
//! `require_admin` additionally requires the `admin` role claim. The
//! admin check reads only the signed claim, never the email address.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::config::JwtAuthConfig;
use shared::jwt::JwtConfig;

/// Authenticated user information extracted from JWT.
#[derive(Debug, Clone)]
pub struct UserAuth {
    /// User ID from the JWT subject claim.
    pub user_id: Uuid,
    /// Account role carried in the token (`admin` or `user`).
    pub role: String,
    /// JWT ID (jti) for session tracking.
    pub jti: String,
}

impl UserAuth {
    /// Validates an access token and returns user authentication info.
    pub fn validate(jwt_config: &JwtConfig, token: &str) -> Result<Self, String> {
        let claims = jwt_config
            .validate_access_token(token)
            .map_err(|e| format!("Invalid token: {}", e))?;

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|_| "Invalid user ID in token".to_string())?;

        Ok(UserAuth {
            user_id,
            role: claims.role,
            jti: claims.jti,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Creates a JwtConfig from JwtAuthConfig.
    pub fn create_jwt_config(config: &JwtAuthConfig) -> Result<JwtConfig, String> {
        JwtConfig::from_rsa_pem(
            &config.private_key,
            &config.public_key,
            config.access_token_expiry_secs,
            config.refresh_token_expiry_secs,
            config.leeway_secs,
        )
        .map_err(|e| format!("Failed to initialize JWT config: {}", e))
    }
}

/// Middleware that requires a valid Bearer access token.
///
/// Authenticated user information is stored in request extensions for
/// downstream handlers.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let auth = match authenticate(&state, &req) {
        Ok(auth) => auth,
        Err(response) => return response,
    };

    req.extensions_mut().insert(auth);
    next.run(req).await
}

/// Middleware that requires a valid Bearer access token with the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let auth = match authenticate(&state, &req) {
        Ok(auth) => auth,
        Err(response) => return response,
    };

    if !auth.is_admin() {
        return forbidden_response("Admin access required");
    }

    req.extensions_mut().insert(auth);
    next.run(req).await
}

fn authenticate(state: &AppState, req: &Request<Body>) -> Result<UserAuth, Response> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            return Err(unauthorized_response(
                "Missing or invalid Authorization header",
            ))
        }
    };

    let jwt_config = match UserAuth::create_jwt_config(&state.config.jwt) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to create JWT config: {}", e);
            return Err(internal_error_response("Authentication service unavailable"));
        }
    };

    UserAuth::validate(&jwt_config, token).map_err(|e| {
        tracing::debug!("JWT validation failed: {}", e);
        unauthorized_response("Invalid or expired token")
    })
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

fn forbidden_response(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": message
        })),
    )
        .into_response()
}

fn internal_error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::jwt::JwtConfig;

    fn test_jwt() -> JwtConfig {
        JwtConfig::from_secret("user-auth-middleware-test-secret")
    }

    #[test]
    fn test_validate_access_token_carries_role() {
        let jwt = test_jwt();
        let user_id = Uuid::new_v4();
        let (token, _) = jwt.generate_access_token(user_id, "admin").unwrap();

        let auth = UserAuth::validate(&jwt, &token).unwrap();
        assert_eq!(auth.user_id, user_id);
        assert!(auth.is_admin());
    }

    #[test]
    fn test_user_role_is_not_admin() {
        let jwt = test_jwt();
        let (token, _) = jwt.generate_access_token(Uuid::new_v4(), "user").unwrap();

        let auth = UserAuth::validate(&jwt, &token).unwrap();
        assert!(!auth.is_admin());
    }

    #[test]
    fn test_refresh_token_rejected() {
        let jwt = test_jwt();
        let (token, _) = jwt.generate_refresh_token(Uuid::new_v4(), "user").unwrap();
        assert!(UserAuth::validate(&jwt, &token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let jwt = test_jwt();
        assert!(UserAuth::validate(&jwt, "not.a.token").is_err());
    }

    #[test]
    fn test_unauthorized_response() {
        let response = unauthorized_response("Missing or invalid Authorization header");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_response() {
        let response = forbidden_response("Admin access required");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
