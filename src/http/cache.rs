//! HTTP cache control module
//!
//! `ETag` generation and conditional request handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from content, e.g. `"a1b2c3"`
pub fn etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check whether the client's `If-None-Match` header matches the server's
/// `ETag`. Handles comma-separated lists and the `*` wildcard.
///
/// Returns true if matched (the response should be 304).
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted() {
        let tag = etag(b"hello world");
        assert!(tag.starts_with('"'));
        assert!(tag.ends_with('"'));
        assert!(tag.len() > 2);
    }

    #[test]
    fn etag_stable_for_same_content() {
        assert_eq!(etag(b"same content"), etag(b"same content"));
        assert_ne!(etag(b"content a"), etag(b"content b"));
    }

    #[test]
    fn match_single_list_and_wildcard() {
        let tag = "\"abc123\"";
        assert!(etag_matches(Some("\"abc123\""), tag));
        assert!(etag_matches(Some("\"xyz\", \"abc123\""), tag));
        assert!(etag_matches(Some("*"), tag));
        assert!(!etag_matches(Some("\"different\""), tag));
        assert!(!etag_matches(None, tag));
    }
}
