//! Message and session types for agent conversations

use serde::{Deserialize, Serialize};

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,

    /// Tool call ID (for tool responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Tool calls made by assistant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallRequest>>,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            tool_call_id: None,
            tool_calls: None,
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_call_id: None,
            tool_calls: None,
        }
    }

    /// Create an assistant message with tool calls
    pub fn assistant_with_tools(
        content: impl Into<String>,
        tool_calls: Vec<ToolCallRequest>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_call_id: None,
            tool_calls: Some(tool_calls),
        }
    }

    /// Create a tool result message
    pub fn tool_result(call_id: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: result.into(),
            tool_call_id: Some(call_id.into()),
            tool_calls: None,
        }
    }

    /// Create a tool error message (self-correction feedback for the model)
    pub fn tool_error(call_id: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::tool_result(call_id, format!("Error: {}", error))
    }
}

/// A tool call request emitted by the completion provider.
///
/// `arguments` is the raw serialized key/value payload; it is decoded only
/// when the call is dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

/// A single conversation session.
///
/// History is append-only: messages never shrink or reorder once pushed.
/// The active agent is a name resolved through the registry on every round,
/// never an owned `Agent`.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    active_agent: String,
}

impl Session {
    /// Create a session starting with the given active agent
    pub fn new(active_agent: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            active_agent: active_agent.into(),
        }
    }

    /// Resume a session from prior history and agent
    pub fn resume(messages: Vec<Message>, active_agent: impl Into<String>) -> Self {
        Self {
            messages,
            active_agent: active_agent.into(),
        }
    }

    /// Append a message to the history
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Full ordered history
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Role of the most recent message, if any
    pub fn last_role(&self) -> Option<Role> {
        self.messages.last().map(|m| m.role)
    }

    /// Name of the currently active agent
    pub fn active_agent(&self) -> &str {
        &self.active_agent
    }

    /// Reassign the active agent (handoff)
    pub fn set_active_agent(&mut self, name: impl Into<String>) {
        self.active_agent = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_tool_error_message() {
        let msg = Message::tool_error("tc_1", "boom");
        assert_eq!(msg.role, Role::Tool);
        assert_eq!(msg.content, "Error: boom");
        assert_eq!(msg.tool_call_id.as_deref(), Some("tc_1"));
    }

    #[test]
    fn test_session_append_only() {
        let mut session = Session::new("Router");
        session.push(Message::user("hi"));
        session.push(Message::assistant("hello"));

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.last_role(), Some(Role::Assistant));
        assert_eq!(session.active_agent(), "Router");

        session.set_active_agent("Summarizer");
        assert_eq!(session.active_agent(), "Summarizer");
        // history untouched by a handoff
        assert_eq!(session.messages().len(), 2);
    }
}
