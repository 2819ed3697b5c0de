use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ytsubs::application::ports::{CaptionSource, CaptionSourceError};
use ytsubs::application::services::{SubtitleError, SubtitleService};
use ytsubs::domain::{CaptionTrack, CaptionTrackMap, Video, VideoId, VideoMetadata};

const TWO_CUE_SRT: &str =
    "1\n00:00:00,000 --> 00:00:02,000\nHello\n\n2\n00:00:02,000 --> 00:00:04,000\nworld\n";

struct StubCaptionSource {
    codes: Vec<&'static str>,
    srt: &'static str,
    fail_fetch: bool,
    fetches: AtomicUsize,
}

impl StubCaptionSource {
    fn with_codes(codes: &[&'static str]) -> Self {
        Self {
            codes: codes.to_vec(),
            srt: TWO_CUE_SRT,
            fail_fetch: false,
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl CaptionSource for StubCaptionSource {
    async fn fetch_video(&self, video_id: &VideoId) -> Result<Video, CaptionSourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(CaptionSourceError::RequestFailed("connection reset".to_string()));
        }
        Ok(Video {
            metadata: VideoMetadata {
                title: format!("Video {}", video_id),
                author: "Author".to_string(),
                length_seconds: 4,
                views: 10,
                thumbnail_url: "https://example.com/thumb.jpg".to_string(),
            },
            captions: self
                .codes
                .iter()
                .map(|code| CaptionTrack::new(*code, *code, format!("stub://{}", code)))
                .collect::<CaptionTrackMap>(),
        })
    }

    async fn render_srt(&self, track: &CaptionTrack) -> Result<String, CaptionSourceError> {
        if track.code == "broken" {
            return Err(CaptionSourceError::TimedTextParse("bad xml".to_string()));
        }
        Ok(self.srt.to_string())
    }
}

fn service(source: StubCaptionSource) -> (SubtitleService<StubCaptionSource>, Arc<StubCaptionSource>) {
    let source = Arc::new(source);
    (SubtitleService::new(Arc::clone(&source)), source)
}

const URL: &str = "https://www.youtube.com/watch?v=abc123";

#[tokio::test]
async fn given_matching_track_when_fetching_plain_text_then_returns_cleaned_text() {
    let (service, _) = service(StubCaptionSource::with_codes(&["en"]));
    let text = service.plain_text(URL, "en").await.unwrap();
    assert_eq!(text, "Hello world");
}

#[tokio::test]
async fn given_invalid_url_when_fetching_plain_text_then_fails_before_fetching() {
    let (service, source) = service(StubCaptionSource::with_codes(&["en"]));
    let result = service.plain_text("https://example.com/video", "en").await;

    assert!(matches!(result, Err(SubtitleError::InvalidReference(_))));
    assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_no_tracks_when_fetching_plain_text_then_captions_unavailable() {
    let (service, _) = service(StubCaptionSource::with_codes(&[]));
    let result = service.plain_text(URL, "uk").await;
    assert!(matches!(result, Err(SubtitleError::CaptionsUnavailable)));
}

#[tokio::test]
async fn given_unmatched_language_when_fetching_plain_text_then_message_lists_available() {
    let (service, _) = service(StubCaptionSource::with_codes(&["de", "a.fr"]));
    let err = service.plain_text(URL, "uk").await.unwrap_err();

    assert!(matches!(err, SubtitleError::LanguageNotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("'uk'"));
    assert!(message.contains("de"));
    assert!(message.contains("a.fr"));
}

#[tokio::test]
async fn given_srt_without_text_when_fetching_plain_text_then_no_extractable_text() {
    let mut source = StubCaptionSource::with_codes(&["en"]);
    source.srt = "1\n00:00:00,000 --> 00:00:02,000\n\n";
    let (service, _) = service(source);

    let result = service.plain_text(URL, "en").await;
    assert!(matches!(result, Err(SubtitleError::NoExtractableText)));
}

#[tokio::test]
async fn given_failing_source_when_fetching_plain_text_then_source_error() {
    let mut source = StubCaptionSource::with_codes(&["en"]);
    source.fail_fetch = true;
    let (service, _) = service(source);

    let err = service.plain_text(URL, "en").await.unwrap_err();
    assert!(matches!(err, SubtitleError::Source(_)));
    assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn given_render_failure_when_fetching_plain_text_then_source_error() {
    let (service, _) = service(StubCaptionSource::with_codes(&["broken"]));
    let result = service.plain_text(URL, "broken").await;
    assert!(matches!(result, Err(SubtitleError::Source(_))));
}

#[tokio::test]
async fn given_valid_url_when_fetching_info_then_returns_every_track() {
    let (service, _) = service(StubCaptionSource::with_codes(&["en", "a.en", "uk"]));
    let info = service.video_info(URL).await.unwrap();

    assert_eq!(info.video_id.as_str(), "abc123");
    assert_eq!(info.video.metadata.title, "Video abc123");
    assert_eq!(info.video.captions.codes(), vec!["en", "a.en", "uk"]);
}

#[tokio::test]
async fn given_invalid_url_when_fetching_info_then_invalid_reference() {
    let (service, _) = service(StubCaptionSource::with_codes(&["en"]));
    let result = service.video_info("nope").await;
    assert!(matches!(result, Err(SubtitleError::InvalidReference(_))));
}
