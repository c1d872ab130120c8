use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::AcademicWorkloadRecord;

use super::extraction_prompt::build_extraction_prompt;
use super::response_normalizer::{parse_model_json, strip_code_fences};

/// Asks the completion model to read a BKD document and turns its answer into a record.
pub struct RecordExtractor {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    scan_for_object: bool,
}

impl RecordExtractor {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
            scan_for_object: true,
        }
    }

    /// Controls the balanced-object fallback used when the answer is not bare JSON.
    pub fn with_object_scan(mut self, enabled: bool) -> Self {
        self.scan_for_object = enabled;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(
        skip(self, document_text),
        fields(model = %self.model, text_chars = document_text.chars().count())
    )]
    pub async fn extract_record(
        &self,
        document_text: &str,
    ) -> Result<AcademicWorkloadRecord, ExtractionError> {
        let prompt = build_extraction_prompt(document_text);

        let response = self.llm_client.complete(&self.model, &prompt).await?;
        tracing::debug!(response_chars = response.len(), "Model response received");

        let normalized = strip_code_fences(&response);
        let value = parse_model_json(&normalized, self.scan_for_object).map_err(|e| {
            ExtractionError::MalformedModelOutput {
                reason: e.to_string(),
                raw_response: response.clone(),
            }
        })?;

        let record = AcademicWorkloadRecord::from_model_output(&value);

        tracing::info!(
            courses = record.distinct_course_count(),
            publications = record.publication_count(),
            "Workload record extracted"
        );

        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("model returned malformed JSON: {reason}")]
    MalformedModelOutput {
        reason: String,
        raw_response: String,
    },
    #[error("completion request failed: {0}")]
    UpstreamFailure(#[from] LlmClientError),
}
