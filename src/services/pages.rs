use std::fs;
use std::io;

use crate::error::{Result, WikiError};
use crate::models::PageCreated;
use crate::services::slug::sanitize;
use crate::store::{Store, PAGE_SUFFIX};

/// Slugs of every stored page, sorted for a stable listing.
pub fn list_pages(store: &Store) -> Result<Vec<String>> {
    let dir = store.pages_dir();
    let entries = fs::read_dir(&dir).map_err(|e| WikiError::storage(&dir, e))?;

    let mut slugs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WikiError::storage(&dir, e))?;
        let file_type = entry.file_type().map_err(|e| WikiError::storage(&dir, e))?;
        if !file_type.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(slug) = file_name.to_str().and_then(|n| n.strip_suffix(PAGE_SUFFIX)) {
            slugs.push(slug.to_string());
        }
    }
    slugs.sort();
    Ok(slugs)
}

/// Creates a page from a free-form display name, deriving the slug and
/// seeding a default body. An existing slug is not an error: the caller
/// redirects to the page that is already there.
pub fn create_page(store: &Store, name: &str) -> Result<PageCreated> {
    if name.trim().is_empty() {
        return Err(WikiError::InvalidName {
            reason: "page name is required".to_string(),
        });
    }
    if name.chars().any(|c| c.is_control() || c == '/' || c == '\\') {
        return Err(WikiError::InvalidName {
            reason: "page name contains control or path separator characters".to_string(),
        });
    }

    let slug = sanitize(name);
    let path = store.page_path(&slug);
    if path.exists() {
        return Ok(PageCreated::AlreadyExists(slug));
    }

    let body = format!("This is the new page for **{}**", name);
    fs::write(&path, body).map_err(|e| WikiError::storage(&path, e))?;
    Ok(PageCreated::Created(slug))
}

/// Raw body for a slug. The slug must already be boundary-normalized;
/// the store does not re-sanitize.
pub fn read_page(store: &Store, slug: &str) -> Result<String> {
    let path = store.page_path(slug);
    match fs::read_to_string(&path) {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(WikiError::NotFound(slug.to_string()))
        }
        Err(e) => Err(WikiError::storage(&path, e)),
    }
}
