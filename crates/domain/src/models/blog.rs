//! Blog domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published blog post.
///
/// `author_name` and `category_name` are denormalized at read time via
/// joins; the row itself only stores the foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    /// URL-safe unique public lookup key, derived from the title.
    pub slug: String,
    pub excerpt: String,
    /// Sanitized HTML. Safe to render verbatim.
    pub content: String,
    pub image_url: String,
    pub author_id: Option<Uuid>,
    pub author_name: String,
    pub category_id: Option<Uuid>,
    pub category_name: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blog category. Read-only through the API; seeded by migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// A visitor comment on a post.
///
/// `author_name` is resolved at read time and falls back to "Anonymous"
/// when the account no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogComment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Option<Uuid>,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Listing filter for blog posts. Explicit optional fields; an unset field
/// applies no predicate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostFilter {
    pub category_id: Option<Uuid>,
    pub limit: Option<i64>,
}

impl BlogPostFilter {
    /// Effective row cap: requested limit clamped to 1..=100, default 50.
    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 100)
    }
}

/// Write payload for creating or replacing a blog post. Admin forms submit
/// every field on both create and update.
#[derive(Debug, Clone)]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub tags: Vec<String>,
}
