//! Agent definitions and the registry that resolves handoffs.
//!
//! An [`Agent`] is a capability bundle: instructions, model configuration,
//! and the names of the tool functions it may call. There is no class
//! hierarchy; the Router and Summarizer differ only in their bundles, and
//! arbitrary additional agents follow the same contract.

use std::collections::HashMap;

use serde_json::Value;

/// A named capability bundle: instructions, model configuration, and
/// exposed tool functions. Identity is immutable once registered.
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    model: String,
    instructions: String,
    options: HashMap<String, Value>,
    functions: Vec<String>,
}

impl Agent {
    /// Create an agent with instructions and no tools
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            instructions: instructions.into(),
            options: HashMap::new(),
            functions: Vec::new(),
        }
    }

    /// Set a model option (e.g. temperature) merged into provider requests
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Expose a tool function to this agent, preserving declaration order
    pub fn with_function(mut self, name: impl Into<String>) -> Self {
        self.functions.push(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn options(&self) -> &HashMap<String, Value> {
        &self.options
    }

    /// Exposed tool function names, in declaration order
    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    /// Whether this agent exposes the named tool function
    pub fn exposes(&self, function: &str) -> bool {
        self.functions.iter().any(|f| f == function)
    }
}

/// Registry of agents, static after setup. The session's active-agent
/// name must always resolve here.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Agent>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its own name
    pub fn register(&mut self, agent: Agent) {
        self.agents.insert(agent.name().to_string(), agent);
    }

    /// Look up an agent by name
    pub fn get(&self, name: &str) -> Option<&Agent> {
        self.agents.get(name)
    }

    /// Check whether an agent is registered
    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// List registered agent names
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_bundle() {
        let agent = Agent::new("Summarizer", "mistral-small:24b", "Summarize books.")
            .with_option("temperature", json!(0))
            .with_function("transfer_to_router")
            .with_function("make_presentation");

        assert_eq!(agent.name(), "Summarizer");
        assert!(agent.exposes("make_presentation"));
        assert!(!agent.exposes("transfer_to_summarizer"));
        assert_eq!(agent.functions(), ["transfer_to_router", "make_presentation"]);
        assert_eq!(agent.options().get("temperature"), Some(&json!(0)));
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = AgentRegistry::new();
        registry.register(Agent::new("Router", "m", "route"));

        assert!(registry.contains("Router"));
        assert!(registry.get("Summarizer").is_none());
        assert_eq!(registry.get("Router").unwrap().instructions(), "route");
    }
}
