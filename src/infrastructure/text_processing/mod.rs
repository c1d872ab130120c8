mod mock_document_extractor;
mod pdf_adapter;
mod text_sanitizer;

pub use mock_document_extractor::MockDocumentExtractor;
pub use pdf_adapter::PdfAdapter;
pub use text_sanitizer::sanitize_page_text;
