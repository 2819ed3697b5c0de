mod caption_selector;
mod subtitle_cleaner;
mod subtitle_service;

pub use caption_selector::{ANY_LANGUAGE, Selection, SelectionRule, select_track};
pub use subtitle_cleaner::{CleanError, clean_srt};
pub use subtitle_service::{SubtitleError, SubtitleService, VideoInfo};
