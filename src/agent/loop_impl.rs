//! Dispatch loop - drives one conversation turn through provider and tools

use tracing::{debug, info, warn};

use crate::error::Error;
use crate::provider::CompletionProvider;
use crate::tools::{ToolDispatcher, ToolOutcome};
use crate::Result;

use super::message::{Message, Role, Session};
use super::registry::AgentRegistry;

/// Default bound on tool-reasoning rounds per turn.
pub const DEFAULT_MAX_ROUNDS: usize = 8;

/// What a completed turn hands back to the caller.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Final assistant text of the turn.
    pub content: String,
    /// Name of the agent active when the turn completed.
    pub agent: String,
    /// Role of the last message appended to the session.
    pub last_role: Role,
}

/// The dispatch loop processes one user turn: provider call, ordered tool
/// execution, agent handoffs, and repeat until a round produces no tool
/// calls or the round bound is hit.
pub struct DispatchLoop<P: CompletionProvider> {
    provider: P,
    registry: AgentRegistry,
    dispatcher: ToolDispatcher,
    max_rounds: usize,
}

impl<P: CompletionProvider> DispatchLoop<P> {
    /// Create a dispatch loop with the default round bound
    pub fn new(provider: P, registry: AgentRegistry, dispatcher: ToolDispatcher) -> Self {
        Self {
            provider,
            registry,
            dispatcher,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the per-turn round bound
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Run a single turn for the given user input.
    ///
    /// On `LoopExceeded` the session history stays intact so the caller can
    /// retry. Provider transport failures propagate unchanged.
    pub async fn run_turn(&self, session: &mut Session, input: &str) -> Result<TurnOutcome> {
        session.push(Message::user(input));
        info!(agent = %session.active_agent(), "starting turn");

        for round in 0..self.max_rounds {
            debug!("Round {}/{}", round + 1, self.max_rounds);

            let agent = self
                .registry
                .get(session.active_agent())
                .ok_or_else(|| Error::HandoffNotFound(session.active_agent().to_string()))?;

            let tools = self.dispatcher.definitions_for(agent.functions());
            let completion = self
                .provider
                .complete(agent, session.messages(), &tools)
                .await?;

            let content = completion.content.clone().unwrap_or_default();

            if !completion.has_tool_calls() {
                session.push(Message::assistant(content.clone()));
                info!(agent = %session.active_agent(), "turn complete: {} chars", content.len());
                return Ok(TurnOutcome {
                    content,
                    agent: session.active_agent().to_string(),
                    last_role: Role::Assistant,
                });
            }

            let batch = completion.tool_calls;
            session.push(Message::assistant_with_tools(content, batch.clone()));

            // Strictly in the order received. A handoff switches the active
            // agent immediately and discards the rest of the batch: those
            // calls were reasoned about by the prior agent and are not
            // re-processed under the new one. Deliberate truncation, not an
            // oversight.
            for (position, call) in batch.iter().enumerate() {
                if !agent.exposes(&call.name) {
                    session.push(Message::tool_error(
                        &call.id,
                        format!(
                            "tool '{}' is not available to agent '{}'",
                            call.name,
                            agent.name()
                        ),
                    ));
                    continue;
                }

                match self.dispatcher.dispatch(call).await {
                    Ok(ToolOutcome::Handoff(target)) => {
                        if !self.registry.contains(&target) {
                            return Err(Error::HandoffNotFound(target));
                        }

                        let dropped = batch.len() - position - 1;
                        if dropped > 0 {
                            warn!(dropped, "handoff truncated remaining tool calls in batch");
                        }
                        info!(from = %agent.name(), to = %target, "agent handoff");
                        session.set_active_agent(target);
                        break;
                    }
                    Ok(ToolOutcome::Text(result)) => {
                        debug!(tool = %call.name, "tool succeeded: {} chars", result.len());
                        session.push(Message::tool_result(&call.id, result));
                    }
                    Err(e) if e.is_tool_recoverable() => {
                        debug!(tool = %call.name, error = %e, "tool failed, feeding back");
                        session.push(Message::tool_error(&call.id, e));
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Err(Error::LoopExceeded {
            rounds: self.max_rounds,
        })
    }
}
