use std::fs::{self, OpenOptions};
use std::io::{self, Write};

use crate::error::{Result, WikiError};
use crate::services::youtube::{self, YouTubeLink};
use crate::store::Store;

/// Validates a submitted URL and appends it, raw, to the page's link file.
/// The write is a single append of one complete line, so concurrent
/// submissions cannot interleave partial lines.
pub fn append_link(store: &Store, slug: &str, url: &str) -> Result<YouTubeLink> {
    let link = youtube::extract(url).ok_or_else(|| WikiError::InvalidLink(url.to_string()))?;

    let path = store.links_path(slug);
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .map_err(|e| WikiError::storage(&path, e))?;
    file.write_all(format!("{}\n", url).as_bytes())
        .map_err(|e| WikiError::storage(&path, e))?;

    Ok(link)
}

/// Every stored URL for the page that still parses as a YouTube reference,
/// in insertion order. A missing file is an empty list; lines that no
/// longer parse are skipped, not errors.
pub fn list_links(store: &Store, slug: &str) -> Result<Vec<YouTubeLink>> {
    let path = store.links_path(slug);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(WikiError::storage(&path, e)),
    };

    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(youtube::extract)
        .collect())
}
