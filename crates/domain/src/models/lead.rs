//! Lead-capture domain models: contact messages, property inquiries,
//! newsletter subscribers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A general contact submission from the public site.
///
/// Append-only from the public side; the admin console mutates only the
/// `read` flag and may delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-text discriminator from the contact form (e.g. "penthouse").
    pub property_type: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// An inquiry tied to a specific property listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInquiry {
    pub id: Uuid,
    pub property_id: Uuid,
    /// Joined in for the admin triage view; None if selected without join.
    pub property_title: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A newsletter signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscriber {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Read-status filter for the admin message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatusFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl MessageStatusFilter {
    /// The `read` value rows must match, or None for no predicate.
    pub fn as_read_flag(&self) -> Option<bool> {
        match self {
            MessageStatusFilter::All => None,
            MessageStatusFilter::Read => Some(true),
            MessageStatusFilter::Unread => Some(false),
        }
    }
}

/// Insert payload for a contact submission.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: String,
    pub message: String,
}

/// Insert payload for a property inquiry. The target property id travels
/// separately, taken from the request path.
#[derive(Debug, Clone)]
pub struct NewPropertyInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}
