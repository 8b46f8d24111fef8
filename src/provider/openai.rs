//! OpenAI-compatible chat completions client.
//!
//! Works against any endpoint speaking the `/chat/completions` protocol;
//! the default configuration points at a local Ollama server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::agent::{Agent, Message, Role, ToolCallRequest};
use crate::error::Error;
use crate::tools::ToolDefinition;
use crate::Result;

use super::{Completion, CompletionProvider};

/// Request timeout; a timeout is surfaced as a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat completions client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new client for the given base URL (e.g. `http://localhost:11434/v1`).
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    fn build_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// The agent's instructions lead the conversation as the system message.
    fn convert_messages(&self, agent: &Agent, history: &[Message]) -> Vec<Value> {
        let mut converted = Vec::with_capacity(history.len() + 1);

        converted.push(json!({
            "role": "system",
            "content": agent.instructions(),
        }));

        for m in history {
            let role = match m.role {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::Tool => "tool",
            };

            let mut obj = Map::new();
            obj.insert("role".to_string(), json!(role));
            obj.insert("content".to_string(), json!(m.content));

            if let Some(ref id) = m.tool_call_id {
                obj.insert("tool_call_id".to_string(), json!(id));
            }

            if let Some(ref calls) = m.tool_calls {
                let calls: Vec<Value> = calls
                    .iter()
                    .map(|tc| {
                        json!({
                            "id": tc.id,
                            "type": "function",
                            "function": {
                                "name": tc.name,
                                "arguments": tc.arguments,
                            }
                        })
                    })
                    .collect();
                obj.insert("tool_calls".to_string(), Value::Array(calls));
            }

            converted.push(Value::Object(obj));
        }

        converted
    }

    fn convert_tools(&self, tools: &[ToolDefinition]) -> Option<Value> {
        if tools.is_empty() {
            return None;
        }

        let tools: Vec<Value> = tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name,
                        "description": t.description,
                        "parameters": t.parameters,
                    }
                })
            })
            .collect();

        Some(Value::Array(tools))
    }

    fn parse_response(&self, response: ChatResponse) -> Result<Completion> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("No choices in response".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| ToolCallRequest {
                id: tc.id,
                name: tc.function.name,
                arguments: tc.function.arguments,
            })
            .collect();

        Ok(Completion {
            content: choice.message.content,
            tool_calls,
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        agent: &Agent,
        history: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Completion> {
        let mut request = json!({
            "model": agent.model(),
            "messages": self.convert_messages(agent, history),
        });

        // Agent options (temperature etc.) merge straight into the body.
        for (key, value) in agent.options() {
            request[key.as_str()] = value.clone();
        }

        if let Some(tool_config) = self.convert_tools(tools) {
            request["tools"] = tool_config;
        }

        let response = self
            .client
            .post(self.build_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(Error::Provider(format!("Chat API error: {error_text}")));
        }

        let chat_response: ChatResponse = response.json().await?;
        self.parse_response(chat_response)
    }
}

/// Top-level chat completions response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireToolCall>>,
}

/// Tool call as it appears on the wire: arguments stay a raw JSON string.
#[derive(Debug, Deserialize)]
struct WireToolCall {
    id: String,
    function: WireFunction,
}

#[derive(Debug, Deserialize)]
struct WireFunction {
    name: String,
    arguments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_call_response() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_0",
                        "type": "function",
                        "function": {"name": "make_presentation", "arguments": "{\"titles\":\"A\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let client = OpenAiClient::new("http://localhost:11434/v1", "ollama");
        let completion = client.parse_response(parsed).unwrap();

        assert!(completion.has_tool_calls());
        assert_eq!(completion.tool_calls[0].name, "make_presentation");
        assert_eq!(completion.tool_calls[0].arguments, r#"{"titles":"A"}"#);
        assert_eq!(completion.finish_reason, "tool_calls");
    }

    #[test]
    fn test_convert_messages_leads_with_instructions() {
        let client = OpenAiClient::new("http://localhost:11434/v1", "ollama");
        let agent = Agent::new("Router", "m", "Route requests.");
        let history = vec![Message::user("hi")];

        let converted = client.convert_messages(&agent, &history);
        assert_eq!(converted[0]["role"], "system");
        assert_eq!(converted[0]["content"], "Route requests.");
        assert_eq!(converted[1]["role"], "user");
    }
}
