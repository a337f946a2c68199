use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches the four recognized URL shapes (watch?v=, embed/, v/ and
/// youtu.be/), with scheme and "www." optional. Capture 1 is the video ID.
static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:watch\?v=|embed/|v/)|youtu\.be/)([A-Za-z0-9_-]+)",
    )
    .expect("Invalid YouTube URL pattern")
});

/// A recognized YouTube reference: the video ID plus the canonical embed
/// URL rebuilt from it. Two URLs naming the same video always produce the
/// same embed URL, whatever shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YouTubeLink {
    pub video_id: String,
    pub embed_url: String,
}

/// Finds the first YouTube video reference in free text.
pub fn extract(text: &str) -> Option<YouTubeLink> {
    let id = YOUTUBE_URL.captures(text)?.get(1)?.as_str();
    Some(YouTubeLink {
        video_id: id.to_string(),
        embed_url: embed_url(id),
    })
}

/// Canonical embed form for a video ID.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}
