//! Tool invocation dispatcher - decodes arguments and invokes mapped tools

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::agent::ToolCallRequest;
use crate::error::Error;
use crate::Result;

use super::{Tool, ToolDefinition, ToolOutcome};

/// Maps tool names to implementations and drives their invocation.
pub struct ToolDispatcher {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Check if a tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Tool definitions for the given function names, preserving the
    /// caller's (i.e. the agent's) declared order. Unknown names are skipped.
    pub fn definitions_for(&self, functions: &[String]) -> Vec<ToolDefinition> {
        functions
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|t| t.to_definition())
            .collect()
    }

    /// Decode a call's raw argument payload and invoke the mapped tool.
    ///
    /// Decode failures come back as [`Error::ToolDecode`], unknown tools as
    /// [`Error::Tool`]; both are recoverable in-loop. Execution failures are
    /// whatever the tool itself returned.
    pub async fn dispatch(&self, call: &ToolCallRequest) -> Result<ToolOutcome> {
        let tool = self
            .tools
            .get(&call.name)
            .ok_or_else(|| Error::Tool(format!("Unknown tool: {}", call.name)))?;

        let args = decode_arguments(&call.arguments)?;

        debug!(tool = %call.name, %args, "dispatching tool call");
        tool.execute(args).await
    }
}

impl Default for ToolDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a serialized key/value payload into a JSON object.
///
/// An empty payload counts as `{}` - handoff tools take no arguments and
/// some providers send an empty string for them.
fn decode_arguments(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::ToolDecode(format!("malformed argument payload: {e}")))?;

    if !value.is_object() {
        return Err(Error::ToolDecode(format!(
            "argument payload must be a JSON object, got: {value}"
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::DummyTool;

    fn call(name: &str, arguments: &str) -> ToolCallRequest {
        ToolCallRequest {
            id: "tc_1".to_string(),
            name: name.to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_text_outcome() {
        let mut dispatcher = ToolDispatcher::new();
        dispatcher.register(DummyTool {
            name: "test_tool".to_string(),
            result: "success".to_string(),
        });

        assert!(dispatcher.has("test_tool"));

        let outcome = dispatcher.dispatch(&call("test_tool", "{}")).await.unwrap();
        assert_eq!(outcome, ToolOutcome::Text("success".to_string()));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let dispatcher = ToolDispatcher::new();
        let err = dispatcher.dispatch(&call("unknown", "{}")).await.unwrap_err();
        assert!(matches!(err, Error::Tool(_)));
        assert!(err.is_tool_recoverable());
    }

    #[tokio::test]
    async fn test_dispatch_malformed_arguments() {
        let mut dispatcher = ToolDispatcher::new();
        dispatcher.register(DummyTool {
            name: "test_tool".to_string(),
            result: "unused".to_string(),
        });

        let err = dispatcher
            .dispatch(&call("test_tool", r#"{"a":}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolDecode(_)));
        assert!(err.is_tool_recoverable());
    }

    #[tokio::test]
    async fn test_dispatch_non_object_arguments() {
        let mut dispatcher = ToolDispatcher::new();
        dispatcher.register(DummyTool {
            name: "test_tool".to_string(),
            result: "unused".to_string(),
        });

        let err = dispatcher
            .dispatch(&call("test_tool", "[1,2]"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ToolDecode(_)));
    }

    #[tokio::test]
    async fn test_empty_payload_counts_as_empty_object() {
        let mut dispatcher = ToolDispatcher::new();
        dispatcher.register(DummyTool {
            name: "test_tool".to_string(),
            result: "ok".to_string(),
        });

        let outcome = dispatcher.dispatch(&call("test_tool", "")).await.unwrap();
        assert_eq!(outcome, ToolOutcome::Text("ok".to_string()));
    }

    #[test]
    fn test_definitions_preserve_agent_order() {
        let mut dispatcher = ToolDispatcher::new();
        dispatcher.register(DummyTool {
            name: "b".to_string(),
            result: String::new(),
        });
        dispatcher.register(DummyTool {
            name: "a".to_string(),
            result: String::new(),
        });

        let defs = dispatcher.definitions_for(&["a".to_string(), "b".to_string()]);
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);

        // unknown names are skipped, not errors
        let defs = dispatcher.definitions_for(&["missing".to_string(), "a".to_string()]);
        assert_eq!(defs.len(), 1);
    }
}
