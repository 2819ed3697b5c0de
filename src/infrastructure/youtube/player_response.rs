//! Typed subset of the InnerTube `player` response.

use serde::Deserialize;

use crate::application::ports::CaptionSourceError;
use crate::domain::{
    AUTO_GENERATED_PREFIX, CaptionTrack, CaptionTrackMap, Video, VideoId, VideoMetadata,
};

const PLAYABLE_STATUS: &str = "OK";
const ASR_KIND: &str = "asr";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub video_details: Option<VideoDetails>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub length_seconds: String,
    pub view_count: Option<String>,
    pub thumbnail: Option<ThumbnailList>,
}

#[derive(Debug, Deserialize)]
pub struct ThumbnailList {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<RawCaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCaptionTrack {
    pub base_url: String,
    pub name: Option<TrackName>,
    pub vss_id: Option<String>,
    pub language_code: String,
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackName {
    pub simple_text: Option<String>,
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Deserialize)]
pub struct TextRun {
    pub text: String,
}

impl PlayerResponse {
    pub fn into_video(self, video_id: &VideoId) -> Result<Video, CaptionSourceError> {
        if let Some(status) = self
            .playability_status
            .as_ref()
            .filter(|s| s.status != PLAYABLE_STATUS)
        {
            return Err(CaptionSourceError::Unplayable {
                video_id: video_id.to_string(),
                reason: status
                    .reason
                    .clone()
                    .unwrap_or_else(|| status.status.clone()),
            });
        }

        let details = self.video_details.ok_or_else(|| {
            CaptionSourceError::MalformedResponse(format!(
                "no video details for {}",
                video_id
            ))
        })?;

        let thumbnail_url = details
            .thumbnail
            .and_then(|list| list.thumbnails.into_iter().last())
            .map(|t| t.url)
            .unwrap_or_else(|| default_thumbnail_url(video_id));

        let metadata = VideoMetadata {
            title: details.title,
            author: details.author,
            length_seconds: details.length_seconds.parse().unwrap_or(0),
            views: details
                .view_count
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            thumbnail_url,
        };

        let captions = self
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|renderer| renderer.caption_tracks)
            .unwrap_or_default()
            .into_iter()
            .map(RawCaptionTrack::into_track)
            .collect::<CaptionTrackMap>();

        Ok(Video { metadata, captions })
    }
}

impl RawCaptionTrack {
    fn into_track(self) -> CaptionTrack {
        let code = self.code();
        let name = self
            .name
            .and_then(TrackName::into_text)
            .unwrap_or_else(|| code.clone());
        CaptionTrack::new(code, name, self.base_url)
    }

    /// `vssId` is `.en` for uploaded tracks and `a.en` for speech recognition.
    fn code(&self) -> String {
        match &self.vss_id {
            Some(vss_id) => vss_id.trim_start_matches('.').to_string(),
            None if self.kind.as_deref() == Some(ASR_KIND) => {
                format!("{AUTO_GENERATED_PREFIX}{}", self.language_code)
            }
            None => self.language_code.clone(),
        }
    }
}

impl TrackName {
    fn into_text(self) -> Option<String> {
        if let Some(text) = self.simple_text {
            return Some(text);
        }
        let joined = self
            .runs
            .into_iter()
            .map(|run| run.text)
            .collect::<String>();
        (!joined.is_empty()).then_some(joined)
    }
}

pub fn default_thumbnail_url(video_id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}
