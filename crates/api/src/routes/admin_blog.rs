//! Admin blog post management: list, create, update, delete.
//!
//! Content arrives as rich-text HTML and is sanitized through an
//! allow-list before it ever reaches storage.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use domain::models::{BlogPost, BlogPostFilter, BlogPostInput};
use persistence::repositories::BlogPostRepository;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;

/// Write payload for creating or updating a blog post.
///
/// `slug` is optional; when absent it is derived from the title. `tags`
/// is comma-separated free text, normalized on write.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogPostPayload {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Excerpt is required"))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    #[validate(length(min = 1, max = 2000, message = "Image URL is required"))]
    pub image_url: String,

    pub category_id: Option<Uuid>,

    #[serde(default)]
    pub tags: String,
}

impl BlogPostPayload {
    fn into_input(self, author_id: Option<Uuid>) -> Result<BlogPostInput, ApiError> {
        let slug = match self.slug {
            Some(slug) => slug,
            None => shared::slug::slugify(&self.title),
        };
        if !shared::slug::is_valid_slug(&slug) {
            return Err(ApiError::Validation(
                "Title does not produce a valid slug".to_string(),
            ));
        }

        Ok(BlogPostInput {
            title: self.title.trim().to_string(),
            slug,
            excerpt: self.excerpt.trim().to_string(),
            content: shared::sanitize::sanitize_html(&self.content),
            image_url: self.image_url.trim().to_string(),
            author_id,
            category_id: self.category_id,
            tags: shared::slug::split_list(&self.tags),
        })
    }
}

/// List all posts for the admin console, newest first.
///
/// GET /api/v1/admin/blog/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(filter): Query<BlogPostFilter>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = BlogPostRepository::new(state.pool.clone())
        .list(&filter)
        .await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Create a blog post authored by the calling admin.
///
/// POST /api/v1/admin/blog/posts
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
    Json(payload): Json<BlogPostPayload>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    payload.validate()?;
    let input = payload.into_input(Some(auth.user_id))?;

    let post = BlogPostRepository::new(state.pool.clone())
        .create(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Update a blog post in place. Touches `updated_at`, never `created_at`.
/// The original author attribution is preserved.
///
/// PUT /api/v1/admin/blog/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlogPostPayload>,
) -> Result<Json<BlogPost>, ApiError> {
    payload.validate()?;

    let repo = BlogPostRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))?;

    let input = payload.into_input(existing.author_id)?;
    let post = repo
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))?;

    Ok(Json(post.into()))
}

/// Delete a blog post by id.
///
/// DELETE /api/v1/admin/blog/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = BlogPostRepository::new(state.pool.clone()).delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Blog post not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> BlogPostPayload {
        BlogPostPayload {
            title: "Luxury Living Trends 2026".to_string(),
            slug: None,
            excerpt: "What buyers want this year.".to_string(),
            content: "<p>Market analysis.</p>".to_string(),
            image_url: "https://cdn.example.com/trends.jpg".to_string(),
            category_id: None,
            tags: "market, trends".to_string(),
        }
    }

    #[test]
    fn test_payload_valid() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_payload_derives_slug_from_title() {
        let input = payload().into_input(None).unwrap();
        assert_eq!(input.slug, "luxury-living-trends-2026");
    }

    #[test]
    fn test_payload_keeps_explicit_slug() {
        let mut p = payload();
        p.slug = Some("custom-slug".to_string());
        let input = p.into_input(None).unwrap();
        assert_eq!(input.slug, "custom-slug");
    }

    #[test]
    fn test_payload_rejects_malformed_slug() {
        let mut p = payload();
        p.slug = Some("Not A Slug".to_string());
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_payload_sanitizes_content() {
        let mut p = payload();
        p.content = "<p>hi</p><script>alert(1)</script>".to_string();
        let input = p.into_input(None).unwrap();
        assert!(!input.content.contains("<script"));
        assert!(input.content.contains("<p>hi</p>"));
    }

    #[test]
    fn test_payload_normalizes_tags() {
        let mut p = payload();
        p.tags = " market , , trends,".to_string();
        let input = p.into_input(None).unwrap();
        assert_eq!(input.tags, vec!["market", "trends"]);
    }

    #[test]
    fn test_symbol_only_title_has_no_slug() {
        let mut p = payload();
        p.title = "!!!".to_string();
        assert!(p.into_input(None).is_err());
    }
}
