//! Public lead-capture routes: contact form and newsletter signup.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::{ContactMessage, NewContactMessage};
use persistence::repositories::{ContactMessageRepository, NewsletterRepository};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_lead_captured;

/// Request body for the contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(length(min = 1, max = 100, message = "Property type is required"))]
    pub property_type: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

/// Submit a contact message.
///
/// POST /api/v1/contact
pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    request.validate()?;

    let message = ContactMessageRepository::new(state.pool.clone())
        .create(&NewContactMessage {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            property_type: request.property_type.trim().to_string(),
            message: request.message.trim().to_string(),
        })
        .await?;

    record_lead_captured("contact");
    Ok((StatusCode::CREATED, Json(message.into())))
}

/// Request body for a newsletter signup.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsletterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Response body for a newsletter signup.
#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub subscribed: bool,
}

/// Subscribe to the newsletter.
///
/// Re-subscribing an existing address is reported as success without a
/// second row or a second welcome email. Welcome email failures are
/// logged and never fail the signup.
///
/// POST /api/v1/newsletter
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(request): Json<NewsletterRequest>,
) -> Result<Json<NewsletterResponse>, ApiError> {
    request.validate()?;

    let inserted = NewsletterRepository::new(state.pool.clone())
        .subscribe(request.email.trim())
        .await?;

    if let Some(subscriber) = inserted {
        record_lead_captured("newsletter");
        if let Err(e) = state.email.send_welcome_email(&subscriber.email).await {
            tracing::warn!(
                email = %subscriber.email,
                error = %e,
                "Failed to send welcome email"
            );
        }
    }

    Ok(Json(NewsletterResponse { subscribed: true }))
}
