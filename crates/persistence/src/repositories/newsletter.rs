//! Newsletter subscriber repository.

use sqlx::PgPool;

use crate::entities::NewsletterSubscriberEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct NewsletterRepository {
    pool: PgPool,
}

impl NewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a subscriber. Duplicate emails are a no-op; `None` means the
    /// address was already subscribed.
    pub async fn subscribe(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscriberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("subscribe_newsletter");
        let result = sqlx::query_as::<_, NewsletterSubscriberEntity>(
            r#"
            INSERT INTO newsletter_subscribers (email)
            VALUES (LOWER($1))
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
