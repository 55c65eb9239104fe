//! Property entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the properties table.
#[derive(Debug, Clone, FromRow)]
pub struct PropertyEntity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: i32,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PropertyEntity> for domain::models::Property {
    fn from(entity: PropertyEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            price: entity.price,
            image_url: entity.image_url,
            address: entity.address,
            bedrooms: entity.bedrooms,
            bathrooms: entity.bathrooms,
            square_feet: entity.square_feet,
            features: entity.features,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
