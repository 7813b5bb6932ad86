//! Two-round dialogue protocol with the model.
//!
//! Round one sends the user message together with the two tool schemas and
//! `tool_choice = auto`. If the reply carries no tool calls the turn is done.
//! Otherwise only the first call is executed and its result is folded into
//! round two as a `role = "tool"` message alongside the original user message
//! and the assistant reply replayed verbatim. No round is ever retried.

use currency_exchange::RatesProvider;
use llm_service::{ChatCompleter, ChatMessage, ToolDefinition};
use tracing::{debug, info};

use crate::{dispatcher::ToolDispatcher, error::AssistantError, tools::tool_definitions};

/// Answer used when a model reply carries no textual content.
pub const FALLBACK_ANSWER: &str = "Sorry, I could not come up with an answer this time.";

/// Stateless per-turn orchestrator.
///
/// Holds the chat backend, the tool dispatcher, and the fixed tool schemas;
/// nothing is remembered between calls, so one instance serves any number of
/// concurrent exchanges.
pub struct ShopAssistant<C, R> {
    llm: C,
    dispatcher: ToolDispatcher<R>,
    tools: Vec<ToolDefinition>,
}

impl<C: ChatCompleter, R: RatesProvider> ShopAssistant<C, R> {
    pub fn new(llm: C, dispatcher: ToolDispatcher<R>) -> Self {
        Self {
            llm,
            dispatcher,
            tools: tool_definitions(),
        }
    }

    /// Runs one complete exchange and returns the final answer text.
    ///
    /// # Errors
    /// Upstream and dispatcher failures, mapped into [`AssistantError`]; the
    /// turn is aborted on the first failure with no partial answer.
    pub async fn chat(&self, message: &str) -> Result<String, AssistantError> {
        let user = ChatMessage::user(message);

        let first = self
            .llm
            .complete(std::slice::from_ref(&user), Some(self.tools.as_slice()))
            .await?;

        let Some(call) = first.tool_calls.first().cloned() else {
            debug!("model answered without requesting a tool");
            return Ok(answer_or_fallback(first.content));
        };

        if first.tool_calls.len() > 1 {
            // Only the first call is honored.
            debug!(
                dropped = first.tool_calls.len() - 1,
                "ignoring additional tool calls"
            );
        }

        info!(tool = %call.function.name, call_id = %call.id, "executing tool requested by the model");
        let result = self
            .dispatcher
            .dispatch(&call.function.name, &call.function.arguments)
            .await?;
        let payload = serde_json::to_string(&result)
            .map_err(|e| AssistantError::Internal(format!("failed to encode tool result: {e}")))?;

        let follow_up = [
            user,
            first,
            ChatMessage::tool(call.id, call.function.name, payload),
        ];
        let second = self.llm.complete(&follow_up, None).await?;

        Ok(answer_or_fallback(second.content))
    }
}

fn answer_or_fallback(content: Option<String>) -> String {
    content.unwrap_or_else(|| FALLBACK_ANSWER.to_string())
}
