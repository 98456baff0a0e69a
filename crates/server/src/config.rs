use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue, Method, header::InvalidHeaderValue};
use log::LevelFilter;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const ANY_ORIGIN: &str = "*";

const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

#[derive(clap::Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Extracts gym exercises from free text")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "SCHEDA_BIND", default_value_t = SocketAddr::from(([127, 0, 0, 1], 8080)))]
    pub bind: SocketAddr,
    /// Maximum level of log messages (off, error, warn, info, debug, trace)
    #[arg(long, env = "SCHEDA_LOG_LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
    /// Maximum size of a request body in bytes
    #[arg(long, env = "SCHEDA_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
    /// Origin allowed to call the API, `*` for any
    #[arg(long, env = "SCHEDA_ALLOWED_ORIGIN", default_value = ANY_ORIGIN)]
    pub allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: LevelFilter::Info,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            allowed_origin: ANY_ORIGIN.to_string(),
        }
    }
}

impl Config {
    pub fn cors(&self) -> Result<CorsLayer, ConfigError> {
        let origin = self.allowed_origin.trim();
        let allow_origin = if origin.is_empty() || origin == ANY_ORIGIN {
            AllowOrigin::any()
        } else {
            AllowOrigin::exact(
                HeaderValue::from_str(origin)
                    .map_err(|err| ConfigError::InvalidOrigin(origin.to_string(), err))?,
            )
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static)))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid allowed origin \"{0}\": {1}")]
    InvalidOrigin(String, InvalidHeaderValue),
}
