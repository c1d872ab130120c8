mod extraction_prompt;
mod record_extractor;
mod response_normalizer;
mod workload_service;

pub use extraction_prompt::build_extraction_prompt;
pub use record_extractor::{ExtractionError, RecordExtractor};
pub use response_normalizer::{parse_model_json, strip_code_fences};
pub use workload_service::{ProcessingError, WorkloadService};
