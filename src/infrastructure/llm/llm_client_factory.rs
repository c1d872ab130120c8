use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::{GEMINI_BASE_URL, GeminiClient};
use super::mock_llm_client::MockLlmClient;
use super::openai_compatible_client::{OPENAI_BASE_URL, OpenAiCompatibleClient};

const GEMINI_KEY_VARS: &[&str] = &["GOOGLE_AI_API_KEY", "GOOGLE_API_KEY"];
const OPENAI_KEY_VARS: &[&str] = &["OPENAI_API_KEY"];
const LM_STUDIO_DEFAULT_KEY: &str = "lm-studio";

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("an api key is required for the {0} provider")]
    MissingApiKey(&'static str),
    #[error("base_url is required for the {0} provider")]
    MissingBaseUrl(&'static str),
    #[error("llm client initialization failed: {0}")]
    InitializationFailed(#[from] LlmClientError),
}

/// Builds the completion client named by `llm.provider`.
pub fn create_llm_client(
    settings: &LlmSettings,
) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
    let timeout = Duration::from_secs(settings.timeout_seconds);

    match settings.provider {
        LlmProvider::Gemini => {
            let api_key = api_key_or_env(settings, GEMINI_KEY_VARS)
                .ok_or(LlmClientFactoryError::MissingApiKey("gemini"))?;
            let base_url = settings.base_url.as_deref().unwrap_or(GEMINI_BASE_URL);
            tracing::info!(model = %settings.model, base_url, "Using Gemini completion client");
            let client = GeminiClient::new(base_url, &api_key, timeout)?
                .with_generation(settings.temperature, settings.max_output_tokens);
            Ok(Arc::new(client))
        }
        LlmProvider::OpenAi => {
            let api_key = api_key_or_env(settings, OPENAI_KEY_VARS)
                .ok_or(LlmClientFactoryError::MissingApiKey("openai"))?;
            let base_url = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
            tracing::info!(model = %settings.model, base_url, "Using OpenAI completion client");
            let client = OpenAiCompatibleClient::new(base_url, &api_key, timeout)?
                .with_generation(settings.temperature, settings.max_output_tokens);
            Ok(Arc::new(client))
        }
        LlmProvider::LmStudio => {
            let base_url = settings
                .base_url
                .as_deref()
                .ok_or(LlmClientFactoryError::MissingBaseUrl("lmstudio"))?;
            let api_key = api_key_or_env(settings, &[])
                .unwrap_or_else(|| LM_STUDIO_DEFAULT_KEY.to_string());
            tracing::info!(model = %settings.model, base_url, "Using LM Studio completion client");
            let client = OpenAiCompatibleClient::new(base_url, &api_key, timeout)?
                .with_generation(settings.temperature, settings.max_output_tokens);
            Ok(Arc::new(client))
        }
        LlmProvider::Mock => {
            tracing::warn!("Using mock completion client, every upload yields an empty record");
            Ok(Arc::new(MockLlmClient::default()))
        }
    }
}

fn api_key_or_env(settings: &LlmSettings, fallback_vars: &[&str]) -> Option<String> {
    if !settings.api_key.trim().is_empty() {
        return Some(settings.api_key.trim().to_string());
    }

    fallback_vars
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}
