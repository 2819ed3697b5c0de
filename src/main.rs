use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use ytsubs::application::ports::CaptionSource;
use ytsubs::application::services::SubtitleService;
use ytsubs::infrastructure::observability::{TracingConfig, init_tracing};
use ytsubs::infrastructure::youtube::{InnerTubeClient, MockCaptionSource};
use ytsubs::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;
    let scaffold_config = ScaffoldConfig::from_env();

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    if scaffold_config.enabled {
        tracing::warn!("Scaffold mode enabled, serving mock captions");
        serve(Arc::new(MockCaptionSource), addr).await
    } else {
        let client = InnerTubeClient::new(&settings.youtube)
            .context("Failed to build YouTube client")?;
        serve(Arc::new(client), addr).await
    }
}

async fn serve<C>(caption_source: Arc<C>, addr: SocketAddr) -> anyhow::Result<()>
where
    C: CaptionSource + 'static,
{
    let state = AppState {
        subtitle_service: Arc::new(SubtitleService::new(caption_source)),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
