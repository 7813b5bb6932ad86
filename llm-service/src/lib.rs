//! Chat-completion client for OpenAI-compatible endpoints, with tool calling.
//!
//! The crate wraps the non-streaming `/v1/chat/completions` endpoint behind
//! [`OpenAiService`] and exposes the wire-level message and tool types the
//! dialogue layer exchanges with the model. All failures are normalized into
//! the unified [`LlmError`] type.
//!
//! The [`ChatCompleter`] trait is the seam between this crate and its
//! consumers: production code talks to [`OpenAiService`], tests drive the
//! dialogue loop with a scripted stand-in.

pub mod config;
pub mod error_handler;
pub mod messages;
pub mod services;

mod chat_completer;

pub use chat_completer::ChatCompleter;
pub use config::default_config::config_openai_chat;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{ConfigError, LlmError, Result};
pub use messages::{ChatMessage, FunctionCall, FunctionSpec, Role, ToolCall, ToolDefinition};
pub use services::open_ai_service::OpenAiService;
