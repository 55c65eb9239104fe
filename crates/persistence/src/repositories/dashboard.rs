//! Admin dashboard counts.

use domain::models::DashboardStats;
use sqlx::PgPool;

use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    blog_posts: i64,
    properties: i64,
    contact_messages: i64,
    unread_messages: i64,
    property_inquiries: i64,
    newsletter_subscribers: i64,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Entity counts for the admin dashboard, gathered in one round trip.
    pub async fn stats(&self) -> Result<DashboardStats, sqlx::Error> {
        let timer = QueryTimer::new("dashboard_stats");
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM blog_posts) AS blog_posts,
                (SELECT COUNT(*) FROM properties) AS properties,
                (SELECT COUNT(*) FROM contact_messages) AS contact_messages,
                (SELECT COUNT(*) FROM contact_messages WHERE read = FALSE) AS unread_messages,
                (SELECT COUNT(*) FROM property_inquiries) AS property_inquiries,
                (SELECT COUNT(*) FROM newsletter_subscribers) AS newsletter_subscribers
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(DashboardStats {
            blog_posts: row.blog_posts,
            properties: row.properties,
            contact_messages: row.contact_messages,
            unread_messages: row.unread_messages,
            property_inquiries: row.property_inquiries,
            newsletter_subscribers: row.newsletter_subscribers,
        })
    }
}
