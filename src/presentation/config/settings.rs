use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

const DEFAULT_PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";
const DEFAULT_CLIENT_NAME: &str = "ANDROID";
const DEFAULT_CLIENT_VERSION: &str = "20.10.38";
const DEFAULT_USER_AGENT: &str = "com.google.android.youtube/20.10.38 (Linux; U; Android 14) gzip";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub youtube: YouTubeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSettings {
    pub player_endpoint: String,
    pub client_name: String,
    pub client_version: String,
    pub user_agent: String,
    pub accept_language: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.*` and `APP__*` variables.
    ///
    /// `APP__SERVER__PORT=9000` overrides `server.port`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("youtube.player_endpoint", DEFAULT_PLAYER_ENDPOINT)?
            .set_default("youtube.client_name", DEFAULT_CLIENT_NAME)?
            .set_default("youtube.client_version", DEFAULT_CLIENT_VERSION)?
            .set_default("youtube.user_agent", DEFAULT_USER_AGENT)?
            .set_default("youtube.accept_language", "en-US")?
            .set_default("youtube.request_timeout_secs", 30_i64)?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
