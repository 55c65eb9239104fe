//! Contact message repository.

use domain::models::NewContactMessage;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContactMessageEntity;
use crate::metrics::QueryTimer;

const MESSAGE_COLUMNS: &str = "id, name, email, phone, property_type, message, read, created_at";

#[derive(Clone)]
pub struct ContactMessageRepository {
    pool: PgPool,
}

impl ContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        new: &NewContactMessage,
    ) -> Result<ContactMessageEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact_message");
        let result = sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            INSERT INTO contact_messages (name, email, phone, property_type, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MESSAGE_COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.property_type)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List messages newest first, with optional SQL-side free-text search
    /// across name/email/message and an optional read-status filter.
    pub async fn list(
        &self,
        search: Option<&str>,
        read: Option<bool>,
    ) -> Result<Vec<ContactMessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_contact_messages");
        let result = sqlx::query_as::<_, ContactMessageEntity>(&format!(
            r#"
            SELECT {MESSAGE_COLUMNS}
            FROM contact_messages
            WHERE ($1::text IS NULL
                   OR name ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%'
                   OR message ILIKE '%' || $1 || '%')
              AND ($2::boolean IS NULL OR read = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(search)
        .bind(read)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set the read flag. Idempotent: setting an already-set flag still
    /// reports the row.
    pub async fn set_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<Option<ContactMessageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_contact_message_read");
        let result = sqlx::query_as::<_, ContactMessageEntity>(&format!(
            "UPDATE contact_messages SET read = $2 WHERE id = $1 RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(id)
        .bind(read)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact_message");
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Bulk read-flag update over an explicit id list.
    pub async fn bulk_set_read(&self, ids: &[Uuid], read: bool) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("bulk_set_contact_messages_read");
        let result = sqlx::query("UPDATE contact_messages SET read = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(read)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Bulk delete over an explicit id list. Affects exactly those rows.
    pub async fn bulk_delete(&self, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("bulk_delete_contact_messages");
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
