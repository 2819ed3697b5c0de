use async_trait::async_trait;

use crate::domain::{CaptionTrack, Video, VideoId};

/// Source of video metadata and caption tracks.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    async fn fetch_video(&self, video_id: &VideoId) -> Result<Video, CaptionSourceError>;

    /// Renders one track of a previously fetched video as SRT text.
    async fn render_srt(&self, track: &CaptionTrack) -> Result<String, CaptionSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CaptionSourceError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("video {video_id} is unplayable: {reason}")]
    Unplayable { video_id: String, reason: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("timed text parsing failed: {0}")]
    TimedTextParse(String),
}
