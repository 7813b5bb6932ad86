//! Trait seam between the chat client and the dialogue layer.

use std::future::Future;

use crate::{
    error_handler::LlmError,
    messages::{ChatMessage, ToolDefinition},
    services::open_ai_service::OpenAiService,
};

/// Anything that can answer one non-streaming chat completion.
///
/// Production code uses [`OpenAiService`]; tests substitute a scripted
/// implementation so dialogue logic runs without a network.
pub trait ChatCompleter: Send + Sync {
    /// Completes the given message list, optionally advertising tools.
    ///
    /// Returns the assistant message of the first choice, tool calls included.
    fn complete(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[ToolDefinition]>,
    ) -> impl Future<Output = Result<ChatMessage, LlmError>> + Send;
}

impl ChatCompleter for OpenAiService {
    fn complete(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[ToolDefinition]>,
    ) -> impl Future<Output = Result<ChatMessage, LlmError>> + Send {
        self.chat(messages, tools)
    }
}
