#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod log;
pub mod routes;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use routes::{EXTRACT_EXERCISES_PATH, HEALTH_PATH, Health, router};
