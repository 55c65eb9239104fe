//! Authentication routes for registration, login, and token management.

use axum::{extract::State, http::StatusCode, Extension, Json};
use domain::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;
use crate::services::auth::{AuthError, AuthResult, AuthService};

/// Request body for user registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Display name must be 1-100 characters"))]
    pub display_name: String,
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Token information in response.
#[derive(Debug, Clone, Serialize)]
pub struct TokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response body for successful register/login/refresh.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub tokens: TokensResponse,
}

impl From<AuthResult> for SessionResponse {
    fn from(result: AuthResult) -> Self {
        Self {
            tokens: TokensResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                token_type: "Bearer".to_string(),
                expires_in: result.expires_in,
            },
            user: result.user,
        }
    }
}

fn map_auth_error(err: AuthError) -> ApiError {
    match err {
        AuthError::EmailAlreadyExists => ApiError::Conflict("Email already registered".to_string()),
        AuthError::InvalidCredentials => {
            ApiError::Unauthorized("Invalid email or password".to_string())
        }
        AuthError::AccountDisabled => ApiError::Forbidden("Account is disabled".to_string()),
        AuthError::WeakPassword(msg) => ApiError::Validation(msg),
        AuthError::InvalidRefreshToken => {
            ApiError::Unauthorized("Invalid or expired refresh token".to_string())
        }
        AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
        AuthError::Database(db_err) => ApiError::from(db_err),
        AuthError::Password(e) => ApiError::Internal(format!("Password error: {}", e)),
        AuthError::Token(e) => ApiError::Internal(format!("Token error: {}", e)),
    }
}

fn auth_service(state: &AppState) -> Result<AuthService, ApiError> {
    AuthService::new(state.pool.clone(), &state.config.jwt)
        .map_err(|e| ApiError::Internal(format!("Failed to initialize auth service: {}", e)))
}

/// Register a new user with email and password.
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    request.validate()?;

    let result = auth_service(&state)?
        .register(&request.email, &request.password, &request.display_name)
        .await
        .map_err(map_auth_error)?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// Log in with email and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    request.validate()?;

    let result = auth_service(&state)?
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(result.into()))
}

/// Rotate a refresh token.
///
/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    request.validate()?;

    let result = auth_service(&state)?
        .refresh(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(result.into()))
}

/// Revoke all sessions for the authenticated user.
///
/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
) -> Result<StatusCode, ApiError> {
    auth_service(&state)?
        .logout(auth.user_id)
        .await
        .map_err(map_auth_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Return the authenticated user's account.
///
/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
) -> Result<Json<User>, ApiError> {
    let user = auth_service(&state)?
        .current_user(auth.user_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(user))
}
