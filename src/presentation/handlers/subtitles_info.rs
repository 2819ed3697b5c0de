use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize, Serializer};

use crate::application::ports::CaptionSource;
use crate::application::services::VideoInfo;
use crate::presentation::handlers::subtitles::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub url: String,
}

#[derive(Serialize)]
pub struct VideoInfoResponse {
    pub video: VideoSummary,
    pub available_captions: AvailableCaptions,
}

/// Caption summaries keyed by code, serialized in source order.
pub struct AvailableCaptions(pub Vec<(String, CaptionSummary)>);

impl Serialize for AvailableCaptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(code, summary)| (code, summary)))
    }
}

#[derive(Serialize)]
pub struct VideoSummary {
    pub title: String,
    pub author: String,
    pub length: u64,
    pub views: u64,
    pub video_id: String,
    pub thumbnail: String,
}

#[derive(Serialize)]
pub struct CaptionSummary {
    pub language: String,
    pub code: String,
    pub auto_generated: bool,
}

impl From<VideoInfo> for VideoInfoResponse {
    fn from(info: VideoInfo) -> Self {
        let available_captions = info
            .video
            .captions
            .iter()
            .map(|track| {
                (
                    track.code.clone(),
                    CaptionSummary {
                        language: track.name.clone(),
                        code: track.code.clone(),
                        auto_generated: track.is_auto_generated(),
                    },
                )
            })
            .collect::<Vec<_>>();

        let metadata = info.video.metadata;
        Self {
            video: VideoSummary {
                title: metadata.title,
                author: metadata.author,
                length: metadata.length_seconds,
                views: metadata.views,
                video_id: info.video_id.to_string(),
                thumbnail: metadata.thumbnail_url,
            },
            available_captions: AvailableCaptions(available_captions),
        }
    }
}

/// Every failure, a malformed URL included, is reported as a server error.
#[tracing::instrument(skip(state))]
pub async fn subtitles_info_handler<C>(
    State(state): State<AppState<C>>,
    Query(query): Query<InfoQuery>,
) -> impl IntoResponse
where
    C: CaptionSource + 'static,
{
    match state.subtitle_service.video_info(&query.url).await {
        Ok(info) => (StatusCode::OK, Json(VideoInfoResponse::from(info))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch video info");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
