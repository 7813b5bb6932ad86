//! Error taxonomy of a dialogue turn.
//!
//! Every failure of the two external calls and of the tool dispatcher is
//! collapsed into [`AssistantError`] at the orchestrator boundary. Nothing is
//! retried; a turn either fully completes or fails with exactly one of these.

use currency_exchange::ExchangeError;
use llm_service::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// User-correctable input problem (empty message, non-positive amount).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A currency code the rate feed does not carry.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// LLM or rate service unreachable, failed, or answered non-2xx.
    #[error("upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The LLM signalled an explicit rate limit; callers should back off.
    #[error("language model is rate limited")]
    UpstreamOverloaded,

    /// The model asked for a tool this backend does not offer.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The model's arguments for a known tool did not parse.
    #[error("invalid arguments for tool {tool}: {source}")]
    InvalidToolArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    /// Anything else that should never happen in a healthy turn.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<LlmError> for AssistantError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited { .. } => AssistantError::UpstreamOverloaded,
            other => AssistantError::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<ExchangeError> for AssistantError {
    fn from(err: ExchangeError) -> Self {
        match err {
            ExchangeError::InvalidAmount(amount) => AssistantError::InvalidInput(format!(
                "amount must be a positive number, got {amount}"
            )),
            ExchangeError::UnsupportedCurrency(code) => AssistantError::UnsupportedCurrency(code),
            other => AssistantError::UpstreamUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_rate_limit_maps_to_overloaded() {
        let err = LlmError::RateLimited {
            url: "https://api.openai.com/v1/chat/completions".into(),
            snippet: "slow down".into(),
        };
        assert!(matches!(
            AssistantError::from(err),
            AssistantError::UpstreamOverloaded
        ));
    }

    #[test]
    fn exchange_errors_map_to_their_kinds() {
        assert!(matches!(
            AssistantError::from(ExchangeError::InvalidAmount(-5.0)),
            AssistantError::InvalidInput(_)
        ));
        assert!(matches!(
            AssistantError::from(ExchangeError::UnsupportedCurrency("XXX".into())),
            AssistantError::UnsupportedCurrency(code) if code == "XXX"
        ));
        assert!(matches!(
            AssistantError::from(ExchangeError::Decode("bad payload".into())),
            AssistantError::UpstreamUnavailable(_)
        ));
    }
}
