mod innertube_client;
mod mock_caption_source;
pub mod player_response;
pub mod timed_text;

pub use innertube_client::InnerTubeClient;
pub use mock_caption_source::MockCaptionSource;
