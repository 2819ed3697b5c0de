use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::CaptionSource;
use crate::application::services::SubtitleError;
use crate::presentation::state::AppState;

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
pub struct SubtitlesQuery {
    pub url: String,
    #[serde(default = "default_language")]
    pub lang: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn subtitles_handler<C>(
    State(state): State<AppState<C>>,
    Query(query): Query<SubtitlesQuery>,
) -> impl IntoResponse
where
    C: CaptionSource + 'static,
{
    match state
        .subtitle_service
        .plain_text(&query.url, &query.lang)
        .await
    {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
        Err(e) => {
            let status = status_for(&e);
            let error = match &e {
                SubtitleError::Source(_) => format!("Server error: {}", e),
                _ => e.to_string(),
            };
            if status.is_server_error() {
                tracing::error!(error = %e, "Subtitle extraction failed");
            } else {
                tracing::warn!(error = %e, "Subtitle request rejected");
            }
            (status, Json(ErrorResponse { error })).into_response()
        }
    }
}

fn status_for(error: &SubtitleError) -> StatusCode {
    match error {
        SubtitleError::InvalidReference(_) => StatusCode::BAD_REQUEST,
        SubtitleError::CaptionsUnavailable
        | SubtitleError::LanguageNotFound { .. }
        | SubtitleError::NoExtractableText => StatusCode::NOT_FOUND,
        SubtitleError::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
