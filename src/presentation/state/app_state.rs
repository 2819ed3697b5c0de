use std::sync::Arc;

use crate::application::ports::CaptionSource;
use crate::application::services::SubtitleService;

pub struct AppState<C>
where
    C: CaptionSource,
{
    pub subtitle_service: Arc<SubtitleService<C>>,
}

impl<C> Clone for AppState<C>
where
    C: CaptionSource,
{
    fn clone(&self) -> Self {
        Self {
            subtitle_service: Arc::clone(&self.subtitle_service),
        }
    }
}
