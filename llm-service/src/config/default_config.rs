//! Default chat-model config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = bearer token (mandatory)
//! - `OPENAI_MODEL`     = model id (default `gpt-4o-mini`)
//! - `OPENAI_URL`       = API base URL (default `https://api.openai.com`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64, default 30)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{LlmError, env_opt_u32, env_opt_u64, must_env},
};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Constructs the chat-model config from environment variables.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`](crate::ConfigError::MissingVar) if `OPENAI_API_KEY` is absent
/// - [`ConfigError::InvalidNumber`](crate::ConfigError::InvalidNumber) if a numeric var is malformed
pub fn config_openai_chat() -> Result<LlmModelConfig, LlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = std::env::var("OPENAI_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let endpoint = std::env::var("OPENAI_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.7),
        top_p: None,
        timeout_secs: Some(timeout_secs),
    })
}
