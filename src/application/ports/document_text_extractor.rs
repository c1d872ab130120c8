use async_trait::async_trait;

use crate::domain::UploadedDocument;

/// Turns an uploaded document into its plain text layer, pages in document order.
#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, DocumentParseError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentParseError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("file is not a PDF document")]
    NotAPdf,
    #[error("could not read PDF: {0}")]
    ExtractionFailed(String),
    #[error("could not extract text from PDF {0}")]
    NoTextFound(String),
}
