use std::sync::Arc;

use crate::application::ports::{CaptionSource, CaptionSourceError};
use crate::domain::{Video, VideoId, VideoIdError};

use super::caption_selector::{Selection, select_track};
use super::subtitle_cleaner::{CleanError, clean_srt};

pub struct SubtitleService<C>
where
    C: CaptionSource,
{
    caption_source: Arc<C>,
}

impl<C> SubtitleService<C>
where
    C: CaptionSource,
{
    pub fn new(caption_source: Arc<C>) -> Self {
        Self { caption_source }
    }

    /// Returns the plain text of the best matching caption track for `language`.
    pub async fn plain_text(&self, url: &str, language: &str) -> Result<String, SubtitleError> {
        let video_id = VideoId::from_url(url)?;
        tracing::info!(video_id = %video_id, language = %language, "Fetching subtitles");

        let video = self.caption_source.fetch_video(&video_id).await?;

        let track = match select_track(&video.captions, language) {
            Selection::Found { track, rule } => {
                tracing::debug!(
                    video_id = %video_id,
                    code = %track.code,
                    rule = rule.as_str(),
                    "Caption track selected"
                );
                track
            }
            Selection::Unavailable => return Err(SubtitleError::CaptionsUnavailable),
            Selection::NotFound { available } => {
                return Err(SubtitleError::LanguageNotFound {
                    language: language.to_string(),
                    available,
                });
            }
        };

        let srt = self.caption_source.render_srt(track).await?;
        let text = clean_srt(&srt)?;

        tracing::info!(video_id = %video_id, chars = text.len(), "Subtitles extracted");

        Ok(text)
    }

    /// Returns the video metadata and every caption track, without selecting one.
    pub async fn video_info(&self, url: &str) -> Result<VideoInfo, SubtitleError> {
        let video_id = VideoId::from_url(url)?;
        let video = self.caption_source.fetch_video(&video_id).await?;

        tracing::info!(
            video_id = %video_id,
            tracks = video.captions.len(),
            "Video info fetched"
        );

        Ok(VideoInfo { video_id, video })
    }
}

#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub video_id: VideoId,
    pub video: Video,
}

#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    #[error(transparent)]
    InvalidReference(#[from] VideoIdError),
    #[error("Subtitles are not available for this video")]
    CaptionsUnavailable,
    #[error("Subtitles in language '{language}' not found. Available languages: {available:?}")]
    LanguageNotFound {
        language: String,
        available: Vec<String>,
    },
    #[error("Could not extract subtitle text")]
    NoExtractableText,
    #[error(transparent)]
    Source(#[from] CaptionSourceError),
}

impl From<CleanError> for SubtitleError {
    fn from(err: CleanError) -> Self {
        match err {
            CleanError::NoExtractableText => SubtitleError::NoExtractableText,
        }
    }
}
