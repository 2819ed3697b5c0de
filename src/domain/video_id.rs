use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static DIRECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)").unwrap()
});

static LOOSE_WATCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").unwrap());

/// Identifier of a single video, as found in its watch, short or embed URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Extracts the identifier from a video URL.
    ///
    /// Direct `watch?v=`, `youtu.be/` and `embed/` forms are tried first, then
    /// a watch URL carrying `v=` after other query parameters. The identifier
    /// stops at the first `&`, `?`, `#` or newline.
    pub fn from_url(url: &str) -> Result<Self, VideoIdError> {
        [&*DIRECT_PATTERN, &*LOOSE_WATCH_PATTERN]
            .iter()
            .find_map(|pattern| pattern.captures(url))
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| VideoIdError::InvalidUrl(url.to_string()))
    }

    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VideoIdError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),
}
