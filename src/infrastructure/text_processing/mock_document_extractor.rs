use crate::application::ports::{DocumentParseError, DocumentTextExtractor};
use crate::domain::UploadedDocument;

/// Treats the uploaded bytes as UTF-8 text. Lets the HTTP layer be exercised without
/// real PDF fixtures.
pub struct MockDocumentExtractor;

#[async_trait::async_trait]
impl DocumentTextExtractor for MockDocumentExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, DocumentParseError> {
        let text = String::from_utf8(data.to_vec())
            .map_err(|e| DocumentParseError::ExtractionFailed(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(DocumentParseError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
