use std::sync::Arc;

use bkd_wrapped::application::ports::{DocumentParseError, LlmClient};
use bkd_wrapped::application::services::{
    ExtractionError, ProcessingError, RecordExtractor, WorkloadService,
};
use bkd_wrapped::domain::ContentType;
use bkd_wrapped::infrastructure::llm::MockLlmClient;
use bkd_wrapped::infrastructure::text_processing::{MockDocumentExtractor, PdfAdapter};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01";

fn record_extractor(client: &Arc<MockLlmClient>) -> Arc<RecordExtractor> {
    let llm_client: Arc<dyn LlmClient> = client.clone();
    Arc::new(RecordExtractor::new(llm_client, "test-model"))
}

#[tokio::test]
async fn given_readable_document_when_processing_then_returns_record() {
    let client = Arc::new(MockLlmClient::replying(r#"{"nama": "Dr. X", "total_advisees": 4}"#));
    let service = WorkloadService::new(Arc::new(MockDocumentExtractor), record_extractor(&client));

    let record = service
        .process(b"Nama: Dr. X", "bkd.pdf".to_string(), ContentType::Pdf)
        .await
        .unwrap();

    assert_eq!(record.name, "Dr. X");
    assert_eq!(record.advisee_count, 4);
    assert!(client.last_prompt().unwrap().contains("Nama: Dr. X"));
}

#[tokio::test]
async fn given_png_bytes_when_processing_then_fails_before_calling_the_model() {
    let client = Arc::new(MockLlmClient::default());
    let service = WorkloadService::new(Arc::new(PdfAdapter::new()), record_extractor(&client));

    let result = service
        .process(PNG_BYTES, "photo.png".to_string(), ContentType::Unspecified)
        .await;

    assert!(matches!(
        result,
        Err(ProcessingError::Document(DocumentParseError::NotAPdf))
    ));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn given_blank_document_when_processing_then_reports_no_text() {
    let client = Arc::new(MockLlmClient::default());
    let service = WorkloadService::new(Arc::new(MockDocumentExtractor), record_extractor(&client));

    let result = service
        .process(b"   \n ", "blank.pdf".to_string(), ContentType::Pdf)
        .await;

    assert!(matches!(
        result,
        Err(ProcessingError::Document(DocumentParseError::NoTextFound(_)))
    ));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn given_malformed_model_output_when_processing_then_returns_extraction_error() {
    let client = Arc::new(MockLlmClient::replying("I could not read this document."));
    let service = WorkloadService::new(Arc::new(MockDocumentExtractor), record_extractor(&client));

    let result = service
        .process(b"Nama: Dr. X", "bkd.pdf".to_string(), ContentType::Pdf)
        .await;

    assert!(matches!(
        result,
        Err(ProcessingError::Extraction(
            ExtractionError::MalformedModelOutput { .. }
        ))
    ));
}
