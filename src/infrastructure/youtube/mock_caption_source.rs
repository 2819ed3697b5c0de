use crate::application::ports::{CaptionSource, CaptionSourceError};
use crate::domain::{CaptionTrack, CaptionTrackMap, Video, VideoId, VideoMetadata};

use super::player_response::default_thumbnail_url;

const MOCK_SRT: &str = "1\n00:00:00,000 --> 00:00:02,500\nThis is a scaffold video.\n\n2\n00:00:02,500 --> 00:00:05,000\nIts captions never change.\n\n";

/// Offline caption source serving one fixed video with `en` and `a.en` tracks.
pub struct MockCaptionSource;

#[async_trait::async_trait]
impl CaptionSource for MockCaptionSource {
    async fn fetch_video(&self, video_id: &VideoId) -> Result<Video, CaptionSourceError> {
        let captions: CaptionTrackMap = [
            CaptionTrack::new("en", "English", "mock://captions/en"),
            CaptionTrack::new("a.en", "English (auto-generated)", "mock://captions/a.en"),
        ]
        .into_iter()
        .collect();

        Ok(Video {
            metadata: VideoMetadata {
                title: "Scaffold video".to_string(),
                author: "Scaffold channel".to_string(),
                length_seconds: 5,
                views: 0,
                thumbnail_url: default_thumbnail_url(video_id),
            },
            captions,
        })
    }

    async fn render_srt(&self, _track: &CaptionTrack) -> Result<String, CaptionSourceError> {
        Ok(MOCK_SRT.to_string())
    }
}
