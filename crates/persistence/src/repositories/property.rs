//! Property repository.
//!
//! Listing filters are the intersection of the predicates the caller
//! actually supplied; NULL binds make unset predicates no-ops SQL-side.

use domain::models::{PropertyFilter, PropertyInput};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::PropertyEntity;
use crate::metrics::QueryTimer;

const PROPERTY_COLUMNS: &str = "id, title, slug, description, price, image_url, address, \
     bedrooms, bathrooms, square_feet, features, created_at, updated_at";

#[derive(Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List properties matching every supplied predicate, price descending.
    pub async fn list(&self, filter: &PropertyFilter) -> Result<Vec<PropertyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_properties");
        let result = sqlx::query_as::<_, PropertyEntity>(&format!(
            r#"
            SELECT {PROPERTY_COLUMNS}
            FROM properties
            WHERE ($1::bigint IS NULL OR price >= $1)
              AND ($2::bigint IS NULL OR price <= $2)
              AND ($3::int IS NULL OR bedrooms >= $3)
              AND ($4::double precision IS NULL OR bathrooms >= $4)
            ORDER BY price DESC
            "#
        ))
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.min_bedrooms)
        .bind(filter.min_bathrooms)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Fetch one property by slug. Zero matches is `None`, never an error.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<PropertyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_property_by_slug");
        let result = sqlx::query_as::<_, PropertyEntity>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PropertyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_property_by_id");
        let result = sqlx::query_as::<_, PropertyEntity>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(&self, input: &PropertyInput) -> Result<PropertyEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_property");
        let result = sqlx::query_as::<_, PropertyEntity>(&format!(
            r#"
            INSERT INTO properties
                (title, slug, description, price, image_url, address,
                 bedrooms, bathrooms, square_feet, features)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {PROPERTY_COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(&input.address)
        .bind(input.bedrooms)
        .bind(input.bathrooms)
        .bind(input.square_feet)
        .bind(&input.features)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a property in place. Touches `updated_at`, never `created_at`.
    pub async fn update(
        &self,
        id: Uuid,
        input: &PropertyInput,
    ) -> Result<Option<PropertyEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_property");
        let result = sqlx::query_as::<_, PropertyEntity>(&format!(
            r#"
            UPDATE properties
            SET title = $2, slug = $3, description = $4, price = $5, image_url = $6,
                address = $7, bedrooms = $8, bathrooms = $9, square_feet = $10,
                features = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {PROPERTY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(&input.address)
        .bind(input.bedrooms)
        .bind(input.bathrooms)
        .bind(input.square_feet)
        .bind(&input.features)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_property");
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
