//! Tools module - functions agents can call
//!
//! A tool is a structured function an agent may invoke through the
//! completion provider. A tool's outcome is a tagged result: either plain
//! text fed back into the conversation, or a handoff naming the agent that
//! should take over the session.

mod dispatcher;
mod handoff;
mod presentation;

pub use dispatcher::ToolDispatcher;
pub use handoff::HandoffTool;
pub use presentation::MakePresentationTool;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Outcome of a tool invocation.
///
/// The dispatcher and loop branch on this tag only; a handoff is never
/// surfaced as conversational text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Textual result, appended as a tool-role message.
    Text(String),
    /// Reassign the session's active agent to the named agent.
    Handoff(String),
}

/// Tool definition passed to the completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Tool trait - interface for all agent-callable functions
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used in function calls
    fn name(&self) -> &str;

    /// Description of what the tool does
    fn description(&self) -> &str;

    /// JSON Schema for parameters
    fn parameters(&self) -> Value {
        serde_json::json!({"type": "object", "properties": {}})
    }

    /// Execute the tool with decoded arguments
    async fn execute(&self, args: Value) -> Result<ToolOutcome>;

    /// Convert to tool definition for the provider
    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Dummy tool for testing
#[cfg(test)]
pub struct DummyTool {
    pub name: String,
    pub result: String,
}

#[cfg(test)]
#[async_trait]
impl Tool for DummyTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Dummy tool for testing"
    }

    async fn execute(&self, _args: Value) -> Result<ToolOutcome> {
        Ok(ToolOutcome::Text(self.result.clone()))
    }
}
