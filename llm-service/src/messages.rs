//! Wire types for the OpenAI chat-completions protocol.
//!
//! Covers the subset the assistant actually exchanges: plain messages in the
//! four standard roles, assistant-issued tool calls, and the tool definitions
//! offered with a request. Field names follow the wire format exactly
//! (`tool_calls`, `tool_call_id`, `type: "function"`).

use serde::{Deserialize, Serialize};

/// Message role on the chat-completions wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One function invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Identifier the tool result must be tagged with on the follow-up turn.
    pub id: String,
    /// Always `"function"` on the current wire format.
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCall,
}

/// Function name plus its JSON-encoded argument string, verbatim from the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Raw JSON arguments; parsing is the caller's concern.
    pub arguments: String,
}

/// A single chat message in any of the four roles.
///
/// The same type is used for requests and responses, so an assistant reply
/// carrying tool calls can be replayed verbatim on the second round of a
/// tool exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,

    /// Textual content; absent when the reply is a pure tool request.
    pub content: Option<String>,

    /// Tool invocations requested by the assistant, empty for other roles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,

    /// For `role = "tool"` messages: the id of the call being answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// For `role = "tool"` messages: the name of the tool that produced it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    /// Builds a plain user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }

    /// Builds a system instruction message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }

    /// Builds a tool-result message answering the call with id `call_id`.
    ///
    /// `payload` is the JSON-encoded tool output, passed through to the model
    /// as opaque content.
    pub fn tool(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Tool,
            content: Some(payload.into()),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.into()),
            name: Some(tool_name.into()),
        }
    }

    /// True when the assistant requested at least one tool invocation.
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// A callable function advertised to the model with a request.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionSpec,
}

/// Name, description, and JSON-Schema parameter declaration of a function.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON-Schema object describing the accepted arguments.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Declares a function tool with the given JSON-Schema parameters.
    pub fn function(
        name: &'static str,
        description: &'static str,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            kind: "function",
            function: FunctionSpec {
                name,
                description,
                parameters,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_reply_with_tool_calls_round_trips() {
        let raw = r#"{
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_1",
                "type": "function",
                "function": {"name": "searchProducts", "arguments": "{\"query\":\"watch\"}"}
            }]
        }"#;
        let msg: ChatMessage = serde_json::from_str(raw).expect("valid message");
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.has_tool_calls());
        assert_eq!(msg.tool_calls[0].function.name, "searchProducts");

        // Replaying the message must keep the tool_calls list intact.
        let replayed = serde_json::to_value(&msg).expect("serializable");
        assert_eq!(replayed["tool_calls"][0]["id"], "call_1");
    }

    #[test]
    fn plain_reply_defaults_to_no_tool_calls() {
        let raw = r#"{"role": "assistant", "content": "hello"}"#;
        let msg: ChatMessage = serde_json::from_str(raw).expect("valid message");
        assert!(!msg.has_tool_calls());
        assert_eq!(msg.content.as_deref(), Some("hello"));
    }

    #[test]
    fn tool_message_carries_call_id_and_name() {
        let msg = ChatMessage::tool("call_9", "convertCurrencies", "{\"convertedAmount\":90.0}");
        assert_eq!(msg.role, Role::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_9"));
        assert_eq!(msg.name.as_deref(), Some("convertCurrencies"));

        let wire = serde_json::to_value(&msg).expect("serializable");
        assert_eq!(wire["tool_call_id"], "call_9");
        // Empty tool_calls must not appear on the wire.
        assert!(wire.get("tool_calls").is_none());
    }
}
