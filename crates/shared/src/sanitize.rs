//! HTML sanitization for author-supplied rich text.
//!
//! Blog content arrives from a rich-text editor as serialized HTML and is
//! later rendered verbatim by clients, so it is sanitized once on write
//! with an allow-list. Stored content is therefore safe to inject.

use ammonia::Builder;
use std::collections::HashSet;

/// Tags allowed in blog content: structural and inline formatting elements
/// a rich-text editor emits, plus images and links.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "em", "figcaption", "figure", "h1", "h2", "h3", "h4",
    "h5", "h6", "hr", "i", "img", "li", "ol", "p", "pre", "s", "strong", "sub", "sup", "u", "ul",
];

/// Sanitizes rich-text HTML with an allow-list of tags and attributes.
///
/// Script/style elements, event handlers, and javascript: URLs are
/// removed. Plain text passes through unchanged.
pub fn sanitize_html(input: &str) -> String {
    let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();

    Builder::default()
        .tags(tags)
        .link_rel(Some("noopener noreferrer"))
        .clean(input)
        .to_string()
}
