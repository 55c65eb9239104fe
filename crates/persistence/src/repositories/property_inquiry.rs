//! Property inquiry repository.

use domain::models::NewPropertyInquiry;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::PropertyInquiryEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct PropertyInquiryRepository {
    pool: PgPool,
}

impl PropertyInquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        property_id: Uuid,
        new: &NewPropertyInquiry,
    ) -> Result<PropertyInquiryEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_property_inquiry");
        let result = sqlx::query_as::<_, PropertyInquiryEntity>(
            r#"
            INSERT INTO property_inquiries (property_id, name, email, phone, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, property_id,
                      (SELECT title FROM properties WHERE id = property_id) AS property_title,
                      name, email, phone, message, created_at
            "#,
        )
        .bind(property_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All inquiries newest first, with the property title joined in.
    pub async fn list(&self) -> Result<Vec<PropertyInquiryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_property_inquiries");
        let result = sqlx::query_as::<_, PropertyInquiryEntity>(
            r#"
            SELECT pi.id, pi.property_id, p.title AS property_title,
                   pi.name, pi.email, pi.phone, pi.message, pi.created_at
            FROM property_inquiries pi
            LEFT JOIN properties p ON p.id = pi.property_id
            ORDER BY pi.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_property_inquiry");
        let result = sqlx::query("DELETE FROM property_inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    pub async fn bulk_delete(&self, ids: &[Uuid]) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("bulk_delete_property_inquiries");
        let result = sqlx::query("DELETE FROM property_inquiries WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: PropertyInquiryRepository tests require a database connection
    // and are covered by integration tests.
}
