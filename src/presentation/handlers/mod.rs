mod health;
mod root;
mod subtitles;
mod subtitles_info;

pub use health::health_handler;
pub use root::root_handler;
pub use subtitles::{ErrorResponse, subtitles_handler};
pub use subtitles_info::{VideoInfoResponse, subtitles_info_handler};
