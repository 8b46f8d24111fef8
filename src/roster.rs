//! Default agent roster: the Router/Summarizer pair and their tool wiring.
//!
//! The registry is static after setup; any number of additional agents can
//! be registered alongside these two as long as they follow the same
//! capability-bundle contract.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;

use crate::agent::{Agent, AgentRegistry};
use crate::deck::DeckStore;
use crate::tools::{HandoffTool, MakePresentationTool, ToolDispatcher};

/// Name of the general-purpose routing agent
pub const ROUTER: &str = "Router";

/// Name of the summarizing / presentation-building agent
pub const SUMMARIZER: &str = "Summarizer";

const ROUTER_INSTRUCTIONS: &str = "\
Don't tell the user the steps, just follow them.

Step 1: Receive the user's input.
Step 2: Determine the nature of the request:
    - If the request is a general question, respond as a chatbot.
    - If the request is about summarizing a book or making a presentation, \
call transfer_to_summarizer to forward it to the Summarizer agent.
Step 3: Provide accurate and meaningful responses to general questions.";

const SUMMARIZER_INSTRUCTIONS: &str = "\
Don't tell the user the steps, just follow them.

Step 1: Greet the user and ask for the name of the book they want summarized.
Step 2: Ask how many key points they want in the summary (default: 4).
Step 3: Generate a summary based on the book and the specified number of key points.
Step 4: Display the summary to the user in a readable format.
Step 5: Allow the user to refine any parts of the summary if desired.
Step 6: Once the user confirms the summary, format it for the presentation:
    - Titles: key ideas separated by '^'.
    - Descriptions: corresponding explanations separated by '^', one per title.
Step 7: Ask the user for final confirmation before calling make_presentation.
Step 8: If the user confirms, call make_presentation with the formatted titles \
and descriptions, then inform the user of the result.
Step 9: Call transfer_to_router to hand control back for further interactions.";

/// The general Q&A agent with a single handoff tool
pub fn router_agent(model: &str) -> Agent {
    Agent::new(ROUTER, model, ROUTER_INSTRUCTIONS).with_function("transfer_to_summarizer")
}

/// The content-elicitation agent with handoff and presentation tools.
/// Runs at temperature 0 so summaries stay reproducible.
pub fn summarizer_agent(model: &str) -> Agent {
    Agent::new(SUMMARIZER, model, SUMMARIZER_INSTRUCTIONS)
        .with_option("temperature", json!(0))
        .with_function("transfer_to_router")
        .with_function("make_presentation")
}

/// Registry holding the default two-agent roster
pub fn default_registry(model: &str) -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    registry.register(router_agent(model));
    registry.register(summarizer_agent(model));
    registry
}

/// Dispatcher wiring the roster's tools around a shared deck store handle
pub fn default_dispatcher(store: Arc<Mutex<dyn DeckStore>>) -> ToolDispatcher {
    let mut dispatcher = ToolDispatcher::new();
    dispatcher.register(HandoffTool::new("transfer_to_summarizer", SUMMARIZER));
    dispatcher.register(HandoffTool::new("transfer_to_router", ROUTER));
    dispatcher.register(MakePresentationTool::new(store));
    dispatcher
}
