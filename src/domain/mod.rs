mod caption_track;
mod video;
mod video_id;

pub use caption_track::{AUTO_GENERATED_PREFIX, CaptionTrack, CaptionTrackMap};
pub use video::{Video, VideoMetadata};
pub use video_id::{VideoId, VideoIdError};
