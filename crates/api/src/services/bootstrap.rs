//! Bootstrap admin service for initial setup.
//!
//! Creates or promotes the configured admin account on startup, after
//! migrations. Idempotent across restarts. Admin status lives in the
//! `role` column, never in the email address.

use persistence::repositories::UserRepository;
use shared::password::{hash_password, PasswordError};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::BootstrapConfig;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// Ensure the configured admin account exists.
///
/// Skipped entirely when no bootstrap account is configured.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &BootstrapConfig,
) -> Result<(), BootstrapError> {
    if config.admin_email.is_empty() {
        return Ok(());
    }

    if config.admin_password.is_empty() {
        warn!(
            "VM__BOOTSTRAP__ADMIN_EMAIL is set but VM__BOOTSTRAP__ADMIN_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(());
    }

    let users = UserRepository::new(pool.clone());

    if let Some(existing) = users.find_by_email(&config.admin_email).await? {
        if existing.role == domain::models::UserRole::Admin {
            info!(email = %config.admin_email, "Bootstrap admin already exists - skipping");
            return Ok(());
        }
    }

    let password_hash = hash_password(&config.admin_password)?;
    let admin = users
        .ensure_admin(
            &config.admin_email,
            &password_hash,
            &config.admin_display_name,
        )
        .await?;

    info!(
        email = %admin.email,
        user_id = %admin.id,
        "Bootstrap admin account ready"
    );

    Ok(())
}
