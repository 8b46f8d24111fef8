//! Agent module — core conversation logic.
//!
//! This module contains:
//! - Message and session types
//! - Agent definitions and the registry they live in
//! - The dispatch loop that drives a turn through the completion provider

mod loop_impl;
mod message;
mod registry;

// Re-exports for convenience
pub use loop_impl::{DispatchLoop, TurnOutcome, DEFAULT_MAX_ROUNDS};
pub use message::{Message, Role, Session, ToolCallRequest};
pub use registry::{Agent, AgentRegistry};
