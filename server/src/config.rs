use axum::http::HeaderValue;

use shelfseek::config::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

/// HTTP server configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (`SHELFSEEK_BIND_ADDR`).
    pub bind_addr: String,
    /// The one origin allowed cross-origin access
    /// (`SHELFSEEK_ALLOWED_ORIGIN`).
    pub allowed_origin: HeaderValue,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("SHELFSEEK_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let origin = std::env::var("SHELFSEEK_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin =
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::Invalid {
                    var: "SHELFSEEK_ALLOWED_ORIGIN",
                    message: e.to_string(),
                })?;
        Ok(Self {
            bind_addr,
            allowed_origin,
        })
    }
}
