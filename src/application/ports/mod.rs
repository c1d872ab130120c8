mod document_text_extractor;
mod llm_client;

pub use document_text_extractor::{DocumentParseError, DocumentTextExtractor};
pub use llm_client::{LlmClient, LlmClientError};
