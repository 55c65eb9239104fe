//! Blog post repository.
//!
//! Posts carry denormalized author and category names resolved at read
//! time via LEFT JOIN, so deleted authors or categories degrade to
//! fallback labels instead of breaking reads.

use domain::models::{BlogPostFilter, BlogPostInput};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BlogPostEntity;
use crate::metrics::QueryTimer;

const POST_SELECT: &str = r#"
    SELECT p.id, p.title, p.slug, p.excerpt, p.content, p.image_url,
           p.author_id,
           COALESCE(u.display_name, 'Villamar Team') AS author_name,
           p.category_id,
           COALESCE(c.name, 'Uncategorized') AS category_name,
           p.tags, p.created_at, p.updated_at
    FROM blog_posts p
    LEFT JOIN users u ON u.id = p.author_id
    LEFT JOIN blog_categories c ON c.id = p.category_id
"#;

/// Repository for blog post database operations.
#[derive(Clone)]
pub struct BlogPostRepository {
    pool: PgPool,
}

impl BlogPostRepository {
    /// Creates a new BlogPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List posts newest first, optionally restricted to a category.
    pub async fn list(&self, filter: &BlogPostFilter) -> Result<Vec<BlogPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_blog_posts");
        let result = sqlx::query_as::<_, BlogPostEntity>(&format!(
            r#"
            {POST_SELECT}
            WHERE ($1::uuid IS NULL OR p.category_id = $1)
            ORDER BY p.created_at DESC
            LIMIT $2
            "#
        ))
        .bind(filter.category_id)
        .bind(filter.effective_limit())
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fetch one post by slug. Zero matches is `None`, never an error.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_blog_post_by_slug");
        let result = sqlx::query_as::<_, BlogPostEntity>(&format!(
            "{POST_SELECT} WHERE p.slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_blog_post_by_id");
        let result = sqlx::query_as::<_, BlogPostEntity>(&format!(
            "{POST_SELECT} WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Posts sharing a category with the given post, excluding it,
    /// newest first, capped at `limit`.
    pub async fn find_related(
        &self,
        category_id: Uuid,
        exclude_id: Uuid,
        limit: i64,
    ) -> Result<Vec<BlogPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_related_blog_posts");
        let result = sqlx::query_as::<_, BlogPostEntity>(&format!(
            r#"
            {POST_SELECT}
            WHERE p.category_id = $1 AND p.id <> $2
            ORDER BY p.created_at DESC
            LIMIT $3
            "#
        ))
        .bind(category_id)
        .bind(exclude_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a post. Content is expected to be sanitized by the caller.
    pub async fn create(&self, input: &BlogPostInput) -> Result<BlogPostEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_blog_post");
        let result = sqlx::query_as::<_, BlogPostEntity>(
            r#"
            INSERT INTO blog_posts (title, slug, excerpt, content, image_url, author_id, category_id, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, slug, excerpt, content, image_url,
                      author_id,
                      COALESCE((SELECT display_name FROM users WHERE id = author_id), 'Villamar Team') AS author_name,
                      category_id,
                      COALESCE((SELECT name FROM blog_categories WHERE id = category_id), 'Uncategorized') AS category_name,
                      tags, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.image_url)
        .bind(input.author_id)
        .bind(input.category_id)
        .bind(&input.tags)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a post in place. Touches `updated_at`, never `created_at`.
    pub async fn update(
        &self,
        id: Uuid,
        input: &BlogPostInput,
    ) -> Result<Option<BlogPostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_blog_post");
        let result = sqlx::query_as::<_, BlogPostEntity>(
            r#"
            UPDATE blog_posts
            SET title = $2, slug = $3, excerpt = $4, content = $5, image_url = $6,
                author_id = $7, category_id = $8, tags = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, slug, excerpt, content, image_url,
                      author_id,
                      COALESCE((SELECT display_name FROM users WHERE id = author_id), 'Villamar Team') AS author_name,
                      category_id,
                      COALESCE((SELECT name FROM blog_categories WHERE id = category_id), 'Uncategorized') AS category_name,
                      tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.excerpt)
        .bind(&input.content)
        .bind(&input.image_url)
        .bind(input.author_id)
        .bind(input.category_id)
        .bind(&input.tags)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_blog_post");
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
