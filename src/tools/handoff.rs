//! Handoff tool - reassigns the session's active agent

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

use super::{Tool, ToolOutcome};

/// A tool whose only effect is handing the conversation to another agent.
///
/// Takes no arguments. Its outcome is never surfaced as conversational
/// text; the dispatch loop interprets it as an active-agent switch.
pub struct HandoffTool {
    name: String,
    target: String,
    description: String,
}

impl HandoffTool {
    /// Create a handoff tool that transfers to `target`
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        let description = format!("Transfer the conversation to the {} agent.", target);
        Self {
            name: name.into(),
            target,
            description,
        }
    }

    /// Name of the agent this tool hands off to
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[async_trait]
impl Tool for HandoffTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, _args: Value) -> Result<ToolOutcome> {
        Ok(ToolOutcome::Handoff(self.target.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_handoff_outcome() {
        let tool = HandoffTool::new("transfer_to_summarizer", "Summarizer");
        assert_eq!(tool.name(), "transfer_to_summarizer");
        assert_eq!(tool.target(), "Summarizer");

        let outcome = tool.execute(json!({})).await.unwrap();
        assert_eq!(outcome, ToolOutcome::Handoff("Summarizer".to_string()));
    }
}
