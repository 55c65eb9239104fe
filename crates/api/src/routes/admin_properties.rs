//! Admin property management: list, create, update, delete.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{Property, PropertyFilter, PropertyInput};
use persistence::repositories::PropertyRepository;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Write payload for creating or updating a property listing.
///
/// `features` is comma-separated free text, normalized on write.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PropertyPayload {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "shared::validation::validate_price"))]
    pub price: i64,

    #[validate(length(min = 1, max = 2000, message = "Image URL is required"))]
    pub image_url: String,

    #[validate(length(min = 1, max = 300, message = "Address is required"))]
    pub address: String,

    #[validate(range(min = 0, message = "Bedrooms must be non-negative"))]
    pub bedrooms: i32,

    #[validate(custom(function = "shared::validation::validate_bathrooms"))]
    pub bathrooms: f64,

    #[validate(range(min = 0, message = "Square feet must be non-negative"))]
    pub square_feet: i32,

    #[serde(default)]
    pub features: String,
}

impl PropertyPayload {
    fn into_input(self) -> Result<PropertyInput, ApiError> {
        let slug = match self.slug {
            Some(slug) => slug,
            None => shared::slug::slugify(&self.title),
        };
        if !shared::slug::is_valid_slug(&slug) {
            return Err(ApiError::Validation(
                "Title does not produce a valid slug".to_string(),
            ));
        }

        Ok(PropertyInput {
            title: self.title.trim().to_string(),
            slug,
            description: self.description.trim().to_string(),
            price: self.price,
            image_url: self.image_url.trim().to_string(),
            address: self.address.trim().to_string(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            features: shared::slug::split_list(&self.features),
        })
    }
}

/// List all properties for the admin console, price descending.
///
/// GET /api/v1/admin/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = PropertyRepository::new(state.pool.clone())
        .list(&filter)
        .await?;
    Ok(Json(properties.into_iter().map(Into::into).collect()))
}

/// Create a property listing.
///
/// POST /api/v1/admin/properties
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<PropertyPayload>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    payload.validate()?;
    let input = payload.into_input()?;

    let property = PropertyRepository::new(state.pool.clone())
        .create(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(property.into())))
}

/// Update a property in place. Touches `updated_at`, never `created_at`.
///
/// PUT /api/v1/admin/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PropertyPayload>,
) -> Result<Json<Property>, ApiError> {
    payload.validate()?;
    let input = payload.into_input()?;

    let property = PropertyRepository::new(state.pool.clone())
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    Ok(Json(property.into()))
}

/// Delete a property by id.
///
/// DELETE /api/v1/admin/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = PropertyRepository::new(state.pool.clone())
        .delete(id)
        .await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Property not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
