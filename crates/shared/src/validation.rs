//! Custom field validators shared across request types.

use validator::ValidationError;

/// Minimum length for a blog comment body.
pub const MIN_COMMENT_LENGTH: usize = 3;

/// Validates a phone number: digits with optional separators, 7-20 chars.
/// Lead-capture forms accept loosely formatted numbers; this only rejects
/// strings that cannot plausibly be dialed.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    let digit_count = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')' | '.'));

    if valid_chars && (7..=20).contains(&digit_count) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Invalid phone number".into());
        Err(err)
    }
}

/// Validates that a comment body meets the minimum length after trimming.
pub fn validate_comment_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().len() >= MIN_COMMENT_LENGTH {
        Ok(())
    } else {
        let mut err = ValidationError::new("comment_length");
        err.message = Some("Comment must be at least 3 characters".into());
        Err(err)
    }
}

/// Validates that a client-supplied slug has valid shape.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if crate::slug::is_valid_slug(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_shape");
        err.message =
            Some("Slug must be lowercase alphanumeric with single hyphens".into());
        Err(err)
    }
}

/// Validates that a price is non-negative.
pub fn validate_price(price: i64) -> Result<(), ValidationError> {
    if price >= 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_range");
        err.message = Some("Price must be non-negative".into());
        Err(err)
    }
}

/// Validates that a bathroom count is non-negative (half-baths allowed).
pub fn validate_bathrooms(bathrooms: f64) -> Result<(), ValidationError> {
    if bathrooms >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("bathrooms_range");
        err.message = Some("Bathrooms must be non-negative".into());
        Err(err)
    }
}
