use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;

use crate::core::GeneratorError;
use crate::models::ErrorResponse;

/// Message returned for every 500; the cause only goes to the log
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Flatten validator output into a single `field: message` line
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        parts.sort();
        AppError::Validation(parts.join("; "))
    }

    fn body(&self) -> ErrorResponse {
        match self {
            AppError::Validation(message) => ErrorResponse {
                error: "Validation failed".to_string(),
                message: message.clone(),
                status_code: 400,
            },
            AppError::Internal(_) => ErrorResponse {
                error: "Internal server error".to_string(),
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                status_code: 500,
            },
        }
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(message) => tracing::info!("Rejected request: {}", message),
            AppError::Internal(cause) => tracing::error!("Request failed: {}", cause),
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// JSON error response for malformed payloads
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}
