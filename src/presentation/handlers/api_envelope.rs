use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{DocumentParseError, LlmClientError};
use crate::application::services::{ExtractionError, ProcessingError};
use crate::infrastructure::observability::sanitize_for_log;

/// Body of every `/api/process-bkd*` response: `{"status": "success", "data": ...}` or
/// `{"status": "error", "error": "..."}`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope: ApiEnvelope<()> = ApiEnvelope::Error {
            error: self.message,
        };
        (self.status, Json(envelope)).into_response()
    }
}

impl From<ProcessingError> for ApiError {
    fn from(error: ProcessingError) -> Self {
        let status = match &error {
            ProcessingError::Document(DocumentParseError::UnsupportedContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            ProcessingError::Document(_) => StatusCode::BAD_REQUEST,
            ProcessingError::Extraction(ExtractionError::UpstreamFailure(
                LlmClientError::RateLimited,
            )) => StatusCode::SERVICE_UNAVAILABLE,
            ProcessingError::Extraction(_) => StatusCode::BAD_GATEWAY,
        };

        match &error {
            ProcessingError::Document(e) => {
                tracing::warn!(error = %e, "Rejected uploaded document");
            }
            ProcessingError::Extraction(ExtractionError::MalformedModelOutput {
                reason,
                raw_response,
            }) => {
                tracing::error!(
                    reason = %reason,
                    response = %sanitize_for_log(raw_response),
                    "Model output is not valid JSON"
                );
            }
            ProcessingError::Extraction(e) => {
                tracing::error!(error = %e, "Completion request failed");
            }
        }

        Self::new(status, error.to_string())
    }
}

impl From<DocumentParseError> for ApiError {
    fn from(error: DocumentParseError) -> Self {
        ProcessingError::from(error).into()
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Request is not a multipart upload");
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        tracing::error!(error = %error.body_text(), "Failed to read multipart");
        let message = if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            "Uploaded file is too large".to_string()
        } else {
            format!("Failed to read multipart: {}", error.body_text())
        };
        Self::new(error.status(), message)
    }
}
