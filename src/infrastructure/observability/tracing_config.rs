use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json,
        }
    }
}
