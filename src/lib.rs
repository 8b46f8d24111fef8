//! Deckhand - two-agent conversation routing with slide deck building
//!
//! This library provides the core machinery for routing a user conversation
//! between cooperating agents (handoff via tool calls) and for turning
//! delimiter-separated summary text into an ordered deck of slide records.

pub mod agent;
pub mod config;
pub mod deck;
pub mod error;
pub mod provider;
pub mod roster;
pub mod tools;

pub use error::{Error, Result};
