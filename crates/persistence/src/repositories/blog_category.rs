//! Blog category repository. Categories are read-only through the API
//! and seeded by migration.

use sqlx::PgPool;

use crate::entities::BlogCategoryEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct BlogCategoryRepository {
    pool: PgPool,
}

impl BlogCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All categories in name order.
    pub async fn list(&self) -> Result<Vec<BlogCategoryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_blog_categories");
        let result = sqlx::query_as::<_, BlogCategoryEntity>(
            "SELECT id, name, slug FROM blog_categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
