use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, rejection::BytesRejection},
    http::StatusCode,
    routing::{get, post},
};
use log::{info, warn};
use scheda_domain as domain;
use scheda_wire::{ExtractRequest, ExtractResponse};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{
    config::{Config, ConfigError},
    error::ApiError,
};

pub const EXTRACT_EXERCISES_PATH: &str = "/extract-exercises";
pub const HEALTH_PATH: &str = "/health";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub version: String,
}

pub fn router(config: &Config) -> Result<Router, ConfigError> {
    Ok(Router::new()
        .route(EXTRACT_EXERCISES_PATH, post(extract_exercises))
        .route(HEALTH_PATH, get(health))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(config.cors()?))
}

async fn extract_exercises(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!("failed to read request body: {rejection}");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::InvalidBody
        }
    })?;
    let request = serde_json::from_slice::<ExtractRequest>(&body).map_err(|err| {
        warn!("invalid request body: {err}");
        ApiError::InvalidBody
    })?;
    let text = request.text().ok_or(ApiError::MissingText)?;

    let response = domain::extract_exercises(text)
        .into_iter()
        .collect::<ExtractResponse>();
    info!(
        "extracted {} exercises from {} lines",
        response.exercises.len(),
        text.lines().count()
    );

    Ok(Json(response))
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
