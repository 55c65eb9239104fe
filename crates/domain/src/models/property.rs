//! Property listing domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A property listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    /// URL-safe unique public lookup key.
    pub slug: String,
    pub description: String,
    /// Whole currency units.
    pub price: i64,
    pub image_url: String,
    pub address: String,
    pub bedrooms: i32,
    /// Supports half-baths (e.g. 2.5).
    pub bathrooms: f64,
    pub square_feet: i32,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing filter for properties. The result set is the intersection of
/// every applied predicate, sorted price-descending.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<f64>,
}

impl PropertyFilter {
    /// True when no predicate is applied (the "reset filters" state).
    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_bedrooms.is_none()
            && self.min_bathrooms.is_none()
    }

    /// In-memory check that a property satisfies every applied predicate.
    /// The SQL layer applies the same conditions; this keeps the contract
    /// testable without a database.
    pub fn matches(&self, property: &Property) -> bool {
        self.min_price.map_or(true, |min| property.price >= min)
            && self.max_price.map_or(true, |max| property.price <= max)
            && self
                .min_bedrooms
                .map_or(true, |min| property.bedrooms >= min)
            && self
                .min_bathrooms
                .map_or(true, |min| property.bathrooms >= min)
    }
}

/// Write payload for creating or replacing a property listing.
#[derive(Debug, Clone)]
pub struct PropertyInput {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: i32,
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(price: i64, bedrooms: i32, bathrooms: f64) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: "Test Villa".into(),
            slug: "test-villa".into(),
            description: String::new(),
            price,
            image_url: String::new(),
            address: String::new(),
            bedrooms,
            bathrooms,
            square_feet: 3000,
            features: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PropertyFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&sample(1, 0, 0.0)));
    }

    #[test]
    fn test_filter_is_predicate_intersection() {
        let filter = PropertyFilter {
            min_price: Some(1_000_000),
            max_price: Some(5_000_000),
            min_bedrooms: Some(3),
            min_bathrooms: Some(2.5),
        };
        assert!(!filter.is_empty());
        assert!(filter.matches(&sample(2_000_000, 4, 3.0)));
        // Each predicate failing alone rejects the row.
        assert!(!filter.matches(&sample(900_000, 4, 3.0)));
        assert!(!filter.matches(&sample(6_000_000, 4, 3.0)));
        assert!(!filter.matches(&sample(2_000_000, 2, 3.0)));
        assert!(!filter.matches(&sample(2_000_000, 4, 2.0)));
    }

    #[test]
    fn test_half_bath_boundary() {
        let filter = PropertyFilter {
            min_bathrooms: Some(2.5),
            ..Default::default()
        };
        assert!(filter.matches(&sample(0, 0, 2.5)));
        assert!(!filter.matches(&sample(0, 0, 2.0)));
    }
}
