//! Blog entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Joined row for blog posts: base columns plus denormalized author and
/// category names (COALESCE'd in SQL, so never null here).
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostEntity {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
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

impl From<BlogPostEntity> for domain::models::BlogPost {
    fn from(entity: BlogPostEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            excerpt: entity.excerpt,
            content: entity.content,
            image_url: entity.image_url,
            author_id: entity.author_id,
            author_name: entity.author_name,
            category_id: entity.category_id,
            category_name: entity.category_name,
            tags: entity.tags,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the blog_categories table.
#[derive(Debug, Clone, FromRow)]
pub struct BlogCategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<BlogCategoryEntity> for domain::models::BlogCategory {
    fn from(entity: BlogCategoryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }
}

/// Joined row for blog comments with the commenter's display name
/// resolved (falls back to "Anonymous" in SQL).
#[derive(Debug, Clone, FromRow)]
pub struct BlogCommentEntity {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Option<Uuid>,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<BlogCommentEntity> for domain::models::BlogComment {
    fn from(entity: BlogCommentEntity) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            user_id: entity.user_id,
            author_name: entity.author_name,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}
