use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scheda_wire::ErrorResponse;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Testo mancante")]
    MissingText,
    #[error("Corpo della richiesta non valido")]
    InvalidBody,
    #[error("Corpo della richiesta troppo grande")]
    PayloadTooLarge,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingText | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
