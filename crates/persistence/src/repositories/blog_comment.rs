//! Blog comment repository.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BlogCommentEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct BlogCommentRepository {
    pool: PgPool,
}

impl BlogCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Comments for a post, newest first. Display name falls back to
    /// "Anonymous" when the user row no longer exists.
    pub async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<BlogCommentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_blog_comments");
        let result = sqlx::query_as::<_, BlogCommentEntity>(
            r#"
            SELECT bc.id, bc.post_id, bc.user_id,
                   COALESCE(u.display_name, 'Anonymous') AS author_name,
                   bc.content, bc.created_at
            FROM blog_comments bc
            LEFT JOIN users u ON u.id = bc.user_id
            WHERE bc.post_id = $1
            ORDER BY bc.created_at DESC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<BlogCommentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_blog_comment");
        let result = sqlx::query_as::<_, BlogCommentEntity>(
            r#"
            INSERT INTO blog_comments (post_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, user_id,
                      COALESCE((SELECT display_name FROM users WHERE id = user_id), 'Anonymous') AS author_name,
                      content, created_at
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: BlogCommentRepository tests require a database connection and
    // are covered by integration tests.
}
