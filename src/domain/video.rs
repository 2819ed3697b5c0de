use super::caption_track::CaptionTrackMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub length_seconds: u64,
    pub views: u64,
    pub thumbnail_url: String,
}

/// Everything the caption source reports about one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub metadata: VideoMetadata,
    pub captions: CaptionTrackMap,
}
