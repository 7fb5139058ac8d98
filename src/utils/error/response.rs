//! HTTP response handling for errors

use super::types::BeatFlowError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for BeatFlowError {
    fn status_code(&self) -> StatusCode {
        match self {
            BeatFlowError::Validation { .. } => StatusCode::BAD_REQUEST,
            BeatFlowError::TranslationDisabled(_) => StatusCode::SERVICE_UNAVAILABLE,
            BeatFlowError::Translation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Generation failures surface the underlying message: this is a
        // developer-facing service.
        let message = match self {
            BeatFlowError::Config(_)
            | BeatFlowError::Io(_)
            | BeatFlowError::HttpClient(_)
            | BeatFlowError::Serialization(_)
            | BeatFlowError::Yaml(_)
            | BeatFlowError::Server(_)
            | BeatFlowError::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: message,
            code: self.code().to_string(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
