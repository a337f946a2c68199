use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, WikiError};

static ILLEGAL_NAME_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_-]").expect("Invalid name charset pattern"));

/// Derived slugs never grow past this.
const MAX_SLUG_LEN: usize = 200;

/// Slug used when a name sanitizes down to nothing.
pub const FALLBACK_SLUG: &str = "untitled";

/// Strict allow-list check for slug parameters arriving over the API.
/// Anything outside lowercase letters, digits, `_` and `-` is rejected
/// before any file path is built from it.
pub fn validate_name(name: &str) -> Result<()> {
    if ILLEGAL_NAME_CHAR.is_match(name) {
        return Err(WikiError::InvalidName {
            reason: format!(
                "{:?} contains characters outside a-z, 0-9, '_' and '-'",
                name
            ),
        });
    }
    Ok(())
}

/// Derives a URL- and filesystem-safe slug from a display name: lowercase,
/// spaces to hyphens, everything outside `[a-z0-9-]` dropped. Idempotent,
/// and never empty thanks to the fallback.
pub fn sanitize(name: &str) -> String {
    let mut slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    slug.truncate(MAX_SLUG_LEN);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Reduces a request-path slug to its base name so a lookup can never
/// escape the data directories. Inputs that normalize to nothing or to a
/// dot segment come back empty; callers treat an empty slug as a miss.
pub fn safe_slug(raw: &str) -> String {
    let trimmed = raw.trim_end_matches(['/', '\\']);
    let base = trimmed.rsplit(['/', '\\']).next().unwrap_or("");
    if base == "." || base == ".." {
        return String::new();
    }
    base.to_string()
}
