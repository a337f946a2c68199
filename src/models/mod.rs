use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WikiError;

/// One embeddable video attached to a page, with its current vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeVideo {
    pub id: String,
    pub embed_url: String,
    pub votes: i64,
}

/// Outcome of a create request. Creating a page that already exists is
/// not an error; the boundary redirects to the existing page instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCreated {
    Created(String),
    AlreadyExists(String),
}

impl PageCreated {
    pub fn slug(&self) -> &str {
        match self {
            Self::Created(slug) | Self::AlreadyExists(slug) => slug,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl FromStr for VoteDirection {
    type Err = WikiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(Self::Up),
            "downvote" => Ok(Self::Down),
            other => Err(WikiError::InvalidAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteDirection::Up => write!(f, "upvote"),
            VoteDirection::Down => write!(f, "downvote"),
        }
    }
}
