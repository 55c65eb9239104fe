//! Authentication service: registration, login, token refresh, logout.
//!
//! Refresh tokens are persisted as SHA-256 hashes in `user_sessions` and
//! rotated on every refresh. Login failures are deliberately
//! indistinguishable between unknown email and wrong password.

use domain::models::{User, UserRole};
use persistence::repositories::{SessionRepository, UserRepository};
use shared::crypto::sha256_hex;
use shared::jwt::{extract_user_id, JwtConfig, JwtError};
use shared::password::{hash_password, verify_password, PasswordError};
use sqlx::PgPool;
use thiserror::Error;

use crate::config::JwtAuthConfig;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),
}

/// Result of a successful register/login/refresh.
#[derive(Debug)]
pub struct AuthResult {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Authentication service over the users and user_sessions tables.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    jwt: JwtConfig,
}

impl AuthService {
    /// Creates an AuthService with repositories over the given pool.
    pub fn new(pool: PgPool, jwt_config: &JwtAuthConfig) -> Result<Self, AuthError> {
        let jwt = JwtConfig::from_rsa_pem(
            &jwt_config.private_key,
            &jwt_config.public_key,
            jwt_config.access_token_expiry_secs,
            jwt_config.refresh_token_expiry_secs,
            jwt_config.leeway_secs,
        )
        .map_err(AuthError::Token)?;

        Ok(Self {
            users: UserRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
            jwt,
        })
    }

    /// Register a new account. New accounts always get the `user` role.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthResult, AuthError> {
        validate_password_strength(password).map_err(AuthError::WeakPassword)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let password_hash = hash_password(password)?;
        let entity = self
            .users
            .create(email, &password_hash, display_name, UserRole::User)
            .await
            .map_err(|e| match &e {
                // Concurrent registration with the same email
                sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                    AuthError::EmailAlreadyExists
                }
                _ => AuthError::Database(e),
            })?;

        self.issue_tokens(entity.into()).await
    }

    /// Log in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        let entity = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_hash = entity
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        if !entity.is_active {
            return Err(AuthError::AccountDisabled);
        }

        self.users.touch_last_login(entity.id).await?;
        self.issue_tokens(entity.into()).await
    }

    /// Rotate a refresh token against its stored session.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResult, AuthError> {
        let claims = self
            .jwt
            .validate_refresh_token(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;
        let user_id = extract_user_id(&claims).map_err(|_| AuthError::InvalidRefreshToken)?;

        let token_hash = sha256_hex(refresh_token);
        let session = self
            .sessions
            .find_valid_by_hash(&token_hash)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        if session.user_id != user_id {
            return Err(AuthError::InvalidRefreshToken);
        }

        let entity = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !entity.is_active {
            return Err(AuthError::AccountDisabled);
        }

        let user: User = entity.into();
        let (access_token, _) = self.jwt.generate_access_token(user.id, user.role.as_str())?;
        let (new_refresh_token, _) = self
            .jwt
            .generate_refresh_token(user.id, user.role.as_str())?;

        let new_expiry = chrono::Utc::now()
            + chrono::Duration::seconds(self.jwt.refresh_token_expiry_secs);
        self.sessions
            .rotate(session.id, &sha256_hex(&new_refresh_token), new_expiry)
            .await?;

        Ok(AuthResult {
            user,
            access_token,
            refresh_token: new_refresh_token,
            expires_in: self.jwt.access_token_expiry_secs,
        })
    }

    /// Revoke every session for the user.
    pub async fn logout(&self, user_id: uuid::Uuid) -> Result<u64, AuthError> {
        Ok(self.sessions.delete_for_user(user_id).await?)
    }

    /// Fetch the authenticated user's account.
    pub async fn current_user(&self, user_id: uuid::Uuid) -> Result<User, AuthError> {
        let entity = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(entity.into())
    }

    async fn issue_tokens(&self, user: User) -> Result<AuthResult, AuthError> {
        let (access_token, _) = self.jwt.generate_access_token(user.id, user.role.as_str())?;
        let (refresh_token, _) = self
            .jwt
            .generate_refresh_token(user.id, user.role.as_str())?;

        let expires_at = chrono::Utc::now()
            + chrono::Duration::seconds(self.jwt.refresh_token_expiry_secs);
        self.sessions
            .create(user.id, &sha256_hex(&refresh_token), expires_at)
            .await?;

        Ok(AuthResult {
            user,
            access_token,
            refresh_token,
            expires_in: self.jwt.access_token_expiry_secs,
        })
    }
}

/// Password policy: at least 8 characters with one uppercase letter, one
/// lowercase letter, and one digit.
fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a digit".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_strength_accepts_valid() {
        assert!(validate_password_strength("SecureP4ss").is_ok());
    }

    #[test]
    fn test_password_strength_rejects_short() {
        assert!(validate_password_strength("Ab1").is_err());
    }

    #[test]
    fn test_password_strength_rejects_missing_classes() {
        assert!(validate_password_strength("alllowercase1").is_err());
        assert!(validate_password_strength("ALLUPPERCASE1").is_err());
        assert!(validate_password_strength("NoDigitsHere").is_err());
    }

    // Note: AuthService flows require a database connection and are covered
    // by integration tests.
}
