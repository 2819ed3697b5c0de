use std::collections::BTreeMap;

use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

pub async fn root_handler() -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        ("/subtitles", "GET - plain-text subtitles (url, lang)"),
        ("/subtitles/info", "GET - video metadata and caption tracks (url)"),
        ("/health", "GET - service health"),
    ]);

    Json(RootResponse {
        message: "YouTube Subtitles API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
