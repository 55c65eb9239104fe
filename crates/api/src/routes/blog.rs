//! Public blog routes: posts, related posts, comments, categories.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use domain::models::{BlogCategory, BlogComment, BlogPost, BlogPostFilter};
use persistence::repositories::{
    BlogCategoryRepository, BlogCommentRepository, BlogPostRepository,
};
use serde::Deserialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;

/// Maximum number of related posts returned.
const RELATED_POSTS_LIMIT: i64 = 3;

/// List blog posts, newest first. Optional category filter and limit.
///
/// GET /api/v1/blog/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(filter): Query<BlogPostFilter>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let repo = BlogPostRepository::new(state.pool.clone());
    let posts = repo.list(&filter).await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Fetch one blog post by slug.
///
/// GET /api/v1/blog/posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let repo = BlogPostRepository::new(state.pool.clone());
    let post = repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))?;
    Ok(Json(post.into()))
}

/// Related posts: same category, excluding the post itself, capped at 3.
///
/// GET /api/v1/blog/posts/{slug}/related
pub async fn related_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let repo = BlogPostRepository::new(state.pool.clone());
    let post = repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))?;

    // Uncategorized posts have no related set.
    let related = match post.category_id {
        Some(category_id) => repo
            .find_related(category_id, post.id, RELATED_POSTS_LIMIT)
            .await?,
        None => Vec::new(),
    };

    Ok(Json(related.into_iter().map(Into::into).collect()))
}

/// List comments for a post, newest first.
///
/// GET /api/v1/blog/posts/{slug}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<BlogComment>>, ApiError> {
    let posts = BlogPostRepository::new(state.pool.clone());
    let post = posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))?;

    let comments = BlogCommentRepository::new(state.pool.clone())
        .list_for_post(post.id)
        .await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "shared::validation::validate_comment_content"))]
    pub content: String,
}

/// Post a comment on a blog post. Requires authentication.
///
/// Returns the re-fetched comment thread so the client always renders
/// server state.
///
/// POST /api/v1/blog/posts/{slug}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Extension(auth): Extension<UserAuth>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Vec<BlogComment>>), ApiError> {
    request.validate()?;

    let posts = BlogPostRepository::new(state.pool.clone());
    let post = posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))?;

    let comments = BlogCommentRepository::new(state.pool.clone());
    comments
        .create(post.id, auth.user_id, request.content.trim())
        .await?;

    let thread = comments.list_for_post(post.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(thread.into_iter().map(Into::into).collect()),
    ))
}

/// List all blog categories in name order.
///
/// GET /api/v1/blog/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogCategory>>, ApiError> {
    let categories = BlogCategoryRepository::new(state.pool.clone())
        .list()
        .await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
