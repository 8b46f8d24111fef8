//! Completion provider abstraction layer.
//!
//! This module provides:
//! - [`CompletionProvider`] trait for swappable providers
//! - [`OpenAiClient`] for any OpenAI-compatible chat endpoint (the default
//!   configuration targets a local Ollama server)
//!
//! A provider receives the active agent's instructions and options together
//! with the full message history, and returns assistant text and/or an
//! ordered list of tool calls.

mod openai;

use async_trait::async_trait;

use crate::agent::{Agent, Message, ToolCallRequest};
use crate::tools::ToolDefinition;
use crate::Result;

pub use openai::OpenAiClient;

/// Response from a completion provider.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Text content of the response.
    pub content: Option<String>,

    /// Tool calls requested by the model, in the order received.
    pub tool_calls: Vec<ToolCallRequest>,

    /// Reason the response finished.
    pub finish_reason: String,
}

impl Completion {
    /// Create a simple text completion.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: vec![],
            finish_reason: "stop".to_string(),
        }
    }

    /// Create a completion consisting of tool calls only.
    pub fn tool_calls(calls: Vec<ToolCallRequest>) -> Self {
        Self {
            content: None,
            tool_calls: calls,
            finish_reason: "tool_calls".to_string(),
        }
    }

    /// Check if the completion has tool calls.
    #[inline]
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Completion provider trait — swappable backend abstraction.
///
/// The dispatch loop never issues two overlapping `complete` calls for the
/// same session; responses come back in turn order.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the agent's instructions/options plus the full history and get
    /// a completion back.
    async fn complete(
        &self,
        agent: &Agent,
        history: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Completion>;
}

/// Scripted fake provider for testing.
#[cfg(test)]
pub struct FakeProvider {
    responses: std::sync::Mutex<std::collections::VecDeque<Completion>>,
}

#[cfg(test)]
impl FakeProvider {
    /// Create with predefined text responses.
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: std::sync::Mutex::new(
                responses.iter().map(|s| Completion::text(*s)).collect(),
            ),
        }
    }

    /// Create from an explicit completion script.
    pub fn scripted(responses: Vec<Completion>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.into()),
        }
    }

    /// Create with a single tool call followed by a text response.
    pub fn with_tool_call(name: &str, arguments: &str, final_response: &str) -> Self {
        let call = ToolCallRequest {
            id: "tc_1".to_string(),
            name: name.to_string(),
            arguments: arguments.to_string(),
        };

        Self::scripted(vec![
            Completion::tool_calls(vec![call]),
            Completion::text(final_response),
        ])
    }
}

#[cfg(test)]
#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(
        &self,
        _agent: &Agent,
        _history: &[Message],
        _tools: &[ToolDefinition],
    ) -> Result<Completion> {
        let mut responses = self.responses.lock().unwrap();
        responses
            .pop_front()
            .ok_or_else(|| crate::Error::Provider("No more fake responses".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider() {
        let provider = FakeProvider::new(vec!["Hello!", "World!"]);
        let agent = Agent::new("Router", "fake-model", "route");

        let resp1 = provider.complete(&agent, &[], &[]).await.unwrap();
        assert_eq!(resp1.content.as_deref(), Some("Hello!"));
        assert!(!resp1.has_tool_calls());

        let resp2 = provider.complete(&agent, &[], &[]).await.unwrap();
        assert_eq!(resp2.content.as_deref(), Some("World!"));
    }
}
