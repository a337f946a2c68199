use std::collections::HashMap;
use std::fs;
use std::io;

use crate::error::{Result, WikiError};
use crate::models::VoteDirection;
use crate::store::Store;

/// Current tally for a page, video ID to cumulative count. A page with no
/// recorded votes is an empty map. A tally file that exists but does not
/// parse is a storage error, never silently replaced.
pub fn tally(store: &Store, slug: &str) -> Result<HashMap<String, i64>> {
    let path = store.votes_path(slug);
    let raw = match fs::read(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => return Err(WikiError::storage(&path, e)),
    };
    serde_json::from_slice(&raw).map_err(|e| WikiError::storage(&path, io::Error::from(e)))
}

/// Applies one vote and returns the video's new count.
///
/// The read-modify-write runs under the store's per-slug lock, and the
/// updated tally is committed by renaming a fully written temp file over
/// the live one. Concurrent voters cannot lose updates and a concurrent
/// reader never observes a partial tally.
pub fn vote(store: &Store, slug: &str, video_id: &str, direction: VoteDirection) -> Result<i64> {
    let lock = store.vote_lock(slug);
    let _guard = lock.lock().unwrap();

    let mut counts = tally(store, slug)?;
    let count = counts.entry(video_id.to_string()).or_insert(0);
    match direction {
        VoteDirection::Up => *count += 1,
        VoteDirection::Down => *count -= 1,
    }
    let votes = *count;

    let path = store.votes_path(slug);
    let tmp = path.with_extension("json.tmp");
    let raw = serde_json::to_vec(&counts)
        .map_err(|e| WikiError::storage(&path, io::Error::from(e)))?;
    fs::write(&tmp, raw).map_err(|e| WikiError::storage(&tmp, e))?;
    fs::rename(&tmp, &path).map_err(|e| WikiError::storage(&path, e))?;

    Ok(votes)
}
