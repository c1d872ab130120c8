use std::sync::Arc;

use crate::application::ports::{DocumentParseError, DocumentTextExtractor};
use crate::domain::{AcademicWorkloadRecord, ContentType, UploadedDocument};

use super::record_extractor::{ExtractionError, RecordExtractor};

/// PDF bytes in, workload record out. Each call is independent and keeps nothing.
pub struct WorkloadService<E>
where
    E: DocumentTextExtractor,
{
    text_extractor: Arc<E>,
    record_extractor: Arc<RecordExtractor>,
}

impl<E> WorkloadService<E>
where
    E: DocumentTextExtractor,
{
    pub fn new(text_extractor: Arc<E>, record_extractor: Arc<RecordExtractor>) -> Self {
        Self {
            text_extractor,
            record_extractor,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn process(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
    ) -> Result<AcademicWorkloadRecord, ProcessingError> {
        let document = UploadedDocument::new(filename, content_type, data.len() as u64);

        let text = self.text_extractor.extract_text(data, &document).await?;
        tracing::debug!(
            document_id = %document.id.as_uuid(),
            text_chars = text.chars().count(),
            "Document text extracted"
        );

        let record = self.record_extractor.extract_record(&text).await?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Document(#[from] DocumentParseError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
