//! Lead-capture entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the contact_messages table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactMessageEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageEntity> for domain::models::ContactMessage {
    fn from(entity: ContactMessageEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            property_type: entity.property_type,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Joined row for property inquiries with the property title resolved
/// for the admin triage view.
#[derive(Debug, Clone, FromRow)]
pub struct PropertyInquiryEntity {
    pub id: Uuid,
    pub property_id: Uuid,
    pub property_title: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<PropertyInquiryEntity> for domain::models::PropertyInquiry {
    fn from(entity: PropertyInquiryEntity) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            property_title: entity.property_title,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

/// Database row mapping for the newsletter_subscribers table.
#[derive(Debug, Clone, FromRow)]
pub struct NewsletterSubscriberEntity {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewsletterSubscriberEntity> for domain::models::NewsletterSubscriber {
    fn from(entity: NewsletterSubscriberEntity) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}
