use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{Result, WikiError};

pub const PAGE_SUFFIX: &str = ".txt";
pub const LINKS_SUFFIX: &str = ".youtube.txt";
pub const VOTES_SUFFIX: &str = ".votes.json";

/// Handle to the on-disk wiki: one directory each for page bodies, link
/// lists, and vote tallies. The filesystem is the single source of truth;
/// nothing is cached between requests.
pub struct Store {
    root: PathBuf,
    vote_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Store {
    /// Opens the data layout under `root`, creating the directories on
    /// first use.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            root: root.into(),
            vote_locks: Mutex::new(HashMap::new()),
        };
        for dir in [store.pages_dir(), store.links_dir(), store.votes_dir()] {
            fs::create_dir_all(&dir).map_err(|e| WikiError::storage(&dir, e))?;
        }
        Ok(store)
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join("pages")
    }

    pub fn links_dir(&self) -> PathBuf {
        self.root.join("links")
    }

    pub fn votes_dir(&self) -> PathBuf {
        self.root.join("votes")
    }

    pub fn page_path(&self, slug: &str) -> PathBuf {
        self.pages_dir().join(format!("{}{}", slug, PAGE_SUFFIX))
    }

    pub fn links_path(&self, slug: &str) -> PathBuf {
        self.links_dir().join(format!("{}{}", slug, LINKS_SUFFIX))
    }

    pub fn votes_path(&self, slug: &str) -> PathBuf {
        self.votes_dir().join(format!("{}{}", slug, VOTES_SUFFIX))
    }

    /// Write lock for one page's vote tally. Votes on the same page
    /// serialize on this; votes on different pages do not contend.
    pub(crate) fn vote_lock(&self, slug: &str) -> Arc<Mutex<()>> {
        let mut locks = self.vote_locks.lock().unwrap();
        locks.entry(slug.to_string()).or_default().clone()
    }
}
