use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use serde_json::json;

use crate::application::ports::{CaptionSource, CaptionSourceError};
use crate::domain::{CaptionTrack, Video, VideoId};
use crate::presentation::config::YouTubeSettings;

use super::player_response::PlayerResponse;
use super::timed_text::{render_srt, srv3_url};

/// Caption source backed by the InnerTube `player` endpoint.
pub struct InnerTubeClient {
    client: reqwest::Client,
    player_endpoint: String,
    client_name: String,
    client_version: String,
    language: String,
}

impl InnerTubeClient {
    pub fn new(settings: &YouTubeSettings) -> Result<Self, CaptionSourceError> {
        let mut headers = HeaderMap::new();
        let accept_language = HeaderValue::from_str(&settings.accept_language).map_err(|e| {
            CaptionSourceError::RequestFailed(format!("accept-language header: {}", e))
        })?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| CaptionSourceError::RequestFailed(format!("client: {}", e)))?;

        let language = settings
            .accept_language
            .split(['-', ','])
            .next()
            .unwrap_or("en")
            .to_string();

        Ok(Self {
            client,
            player_endpoint: settings.player_endpoint.clone(),
            client_name: settings.client_name.clone(),
            client_version: settings.client_version.clone(),
            language,
        })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, CaptionSourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| CaptionSourceError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CaptionSourceError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl CaptionSource for InnerTubeClient {
    async fn fetch_video(&self, video_id: &VideoId) -> Result<Video, CaptionSourceError> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": self.client_name,
                    "clientVersion": self.client_version,
                    "hl": self.language,
                }
            },
            "videoId": video_id.as_str(),
        });

        tracing::debug!(endpoint = %self.player_endpoint, video_id = %video_id, "Requesting player response");

        let response = self
            .send(self.client.post(&self.player_endpoint).json(&body))
            .await?;

        let player: PlayerResponse = response.json().await.map_err(|e| {
            CaptionSourceError::MalformedResponse(format!("parse player response: {}", e))
        })?;

        let video = player.into_video(video_id)?;

        tracing::debug!(
            video_id = %video_id,
            tracks = video.captions.len(),
            "Player response parsed"
        );

        Ok(video)
    }

    async fn render_srt(&self, track: &CaptionTrack) -> Result<String, CaptionSourceError> {
        let url = srv3_url(&track.source_url)?;

        tracing::debug!(code = %track.code, "Downloading timed text");

        let xml = self
            .send(self.client.get(url))
            .await?
            .text()
            .await
            .map_err(|e| CaptionSourceError::RequestFailed(format!("read timed text: {}", e)))?;

        render_srt(&xml)
    }
}
