use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::CaptionSource;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, root_handler, subtitles_handler, subtitles_info_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: CaptionSource + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/subtitles", get(subtitles_handler::<C>))
        .route("/subtitles/info", get(subtitles_info_handler::<C>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
