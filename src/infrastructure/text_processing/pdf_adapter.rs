use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{DocumentParseError, DocumentTextExtractor};
use crate::domain::{ContentType, UploadedDocument};

use super::text_sanitizer::sanitize_page_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const PDF_MAGIC: &[u8] = b"%PDF-";
// Readers accept junk before the header as long as it starts within the first KiB.
const HEADER_SEARCH_WINDOW: usize = 1024;
const PAGE_SEPARATOR: &str = "\n\n";

/// Reads the embedded text layer of a PDF with pdf_oxide. Scanned documents without a
/// text layer are rejected rather than OCR'd.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn has_pdf_header(data: &[u8]) -> bool {
        let window = &data[..data.len().min(HEADER_SEARCH_WINDOW + PDF_MAGIC.len())];
        window
            .windows(PDF_MAGIC.len())
            .any(|candidate| candidate == PDF_MAGIC)
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, DocumentParseError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| DocumentParseError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            DocumentParseError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        Self::read_all_pages(page_count, |page_index| doc.extract_text(page_index))
    }

    /// Reads pages `0..page_count` in order. The first unreadable page fails the whole
    /// document, so a record is never built from a partial text layer.
    pub fn read_all_pages<E, F>(
        page_count: usize,
        mut read_page: F,
    ) -> Result<Vec<String>, DocumentParseError>
    where
        E: std::fmt::Display,
        F: FnMut(usize) -> Result<String, E>,
    {
        (0..page_count)
            .map(|page_index| {
                read_page(page_index).map_err(|e| {
                    tracing::warn!(page = page_index + 1, error = %e, "Unreadable page");
                    DocumentParseError::ExtractionFailed(format!(
                        "failed to read page {}: {e}",
                        page_index + 1
                    ))
                })
            })
            .collect()
    }
}

#[async_trait]
impl DocumentTextExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            declared_type = document.content_type.as_mime(),
            size_bytes = document.size_bytes,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<String, DocumentParseError> {
        if !Self::has_pdf_header(data) {
            if document.content_type == ContentType::Pdf {
                tracing::warn!("Upload declared as PDF has no PDF header");
            } else {
                tracing::warn!("Upload has no PDF header");
            }
            return Err(DocumentParseError::NotAPdf);
        }

        // pdf_oxide opens from a path; the temp file is removed when it drops.
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            DocumentParseError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;
        temp_file.write_all(data).map_err(|e| {
            DocumentParseError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                std::panic::catch_unwind(|| Self::extract_pages(&temp_path)).unwrap_or_else(|_| {
                    Err(DocumentParseError::ExtractionFailed(
                        "PDF parser panicked".to_string(),
                    ))
                })
            }),
        )
        .await
        .map_err(|_| DocumentParseError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| DocumentParseError::ExtractionFailed(format!("task join error: {e}")))??;

        drop(temp_file);

        let page_count = pages.len();
        let text = pages
            .iter()
            .map(|page| sanitize_page_text(page))
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);

        tracing::info!(page_count, text_chars = text.len(), "PDF text extraction complete");

        if text.is_empty() {
            return Err(DocumentParseError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
