//! Slug derivation and free-text list parsing.
//!
//! Slugs are the public lookup key for blog posts and properties, so the
//! derivation has to be stable: lowercase, strip everything that is not a
//! word character, space, or hyphen, then collapse spaces to hyphens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s-]").expect("valid regex");
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref HYPHEN_RUN: Regex = Regex::new(r"-{2,}").expect("valid regex");
    static ref SLUG_SHAPE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex");
}

/// Derives a URL-safe slug from a title.
///
/// `"Modern Penthouse, Downtown!"` becomes `"modern-penthouse-downtown"`.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Returns true when the string already has valid slug shape:
/// lowercase alphanumeric runs separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_SHAPE.is_match(slug)
}

/// Normalizes a comma-separated free-text list into trimmed, non-empty
/// entries, preserving order. Used for blog tags and property features.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
