//! Public property routes: listings, detail, inquiries.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{NewPropertyInquiry, Property, PropertyFilter, PropertyInquiry};
use persistence::repositories::{PropertyInquiryRepository, PropertyRepository};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_lead_captured;

/// List properties matching the supplied filters, price descending.
///
/// GET /api/v1/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let repo = PropertyRepository::new(state.pool.clone());
    let properties = repo.list(&filter).await?;
    Ok(Json(properties.into_iter().map(Into::into).collect()))
}

/// Fetch one property by slug.
///
/// GET /api/v1/properties/{slug}
pub async fn get_property(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Property>, ApiError> {
    let repo = PropertyRepository::new(state.pool.clone());
    let property = repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
    Ok(Json(property.into()))
}

/// Request body for a property inquiry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InquiryRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

impl InquiryRequest {
    /// Insert payload with surrounding whitespace stripped.
    fn into_new_inquiry(self) -> NewPropertyInquiry {
        NewPropertyInquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Submit an inquiry about a specific property.
///
/// POST /api/v1/properties/{id}/inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Json(request): Json<InquiryRequest>,
) -> Result<(StatusCode, Json<PropertyInquiry>), ApiError> {
    request.validate()?;

    let properties = PropertyRepository::new(state.pool.clone());
    if properties.find_by_id(property_id).await?.is_none() {
        return Err(ApiError::NotFound("Property not found".to_string()));
    }

    let inquiry = PropertyInquiryRepository::new(state.pool.clone())
        .create(property_id, &request.into_new_inquiry())
        .await?;

    record_lead_captured("inquiry");
    Ok((StatusCode::CREATED, Json(inquiry.into())))
}
