use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{DocumentParseError, DocumentTextExtractor};
use crate::domain::{AcademicWorkloadRecord, ContentType, Slide, WrappedDeck};
use crate::presentation::state::AppState;

use super::api_envelope::{ApiEnvelope, ApiError};

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct WrappedPayload {
    pub record: AcademicWorkloadRecord,
    pub slides: Vec<Slide>,
}

struct PdfUpload {
    filename: String,
    content_type: ContentType,
    data: Bytes,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_bkd_handler<E>(
    State(state): State<AppState<E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: DocumentTextExtractor + 'static,
{
    match extract_record(&state, multipart).await {
        Ok(record) => (StatusCode::OK, Json(ApiEnvelope::success(record))).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Same pipeline as [`process_bkd_handler`], answered with the slide deck alongside the record.
#[tracing::instrument(skip(state, multipart))]
pub async fn wrapped_handler<E>(
    State(state): State<AppState<E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: DocumentTextExtractor + 'static,
{
    match extract_record(&state, multipart).await {
        Ok(record) => {
            let deck = WrappedDeck::from_record(&record);
            let payload = WrappedPayload {
                slides: deck.slides().to_vec(),
                record,
            };
            (StatusCode::OK, Json(ApiEnvelope::success(payload))).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn extract_record<E>(
    state: &AppState<E>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AcademicWorkloadRecord, ApiError>
where
    E: DocumentTextExtractor + 'static,
{
    let upload = read_pdf_upload(multipart?).await?;

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "File data received"
    );

    let record = state
        .workload_service
        .process(&upload.data, upload.filename, upload.content_type)
        .await?;

    Ok(record)
}

/// Pulls the `file` field out of the form, ignoring any other fields.
async fn read_pdf_upload(mut multipart: Multipart) -> Result<PdfUpload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let declared = field.content_type().unwrap_or_default().to_string();
        let content_type = ContentType::from_mime(&declared).ok_or_else(|| {
            tracing::warn!(content_type = %declared, "Unsupported content type");
            DocumentParseError::UnsupportedContentType(declared.clone())
        })?;

        let data = field.bytes().await?;
        return Ok(PdfUpload {
            filename,
            content_type,
            data,
        });
    }

    tracing::warn!("Upload request with no file");
    Err(ApiError::new(StatusCode::BAD_REQUEST, "No file uploaded"))
}
