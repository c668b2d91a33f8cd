//! Typed user prompts and selection state
//!
//! This module provides one operation per input kind (angle, integer,
//! distance, point, corner, string, keywords, entity) plus implied selection
//! and highlighting, all normalized to a value or a per-type sentinel.
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces to the host session
//! - `request`: The tagged request and outcome types and the sentinel policy
//! - `gateway`: The prompt gateway that dispatches requests to a session
//! - `keywords`: Keyword spec formatting and parsing
//! - `parser`: Console input parsing
//! - `dialoguer`: Terminal session using the dialoguer library
//! - `scripted`: Session answering from a script

pub mod dialoguer;
pub mod gateway;
pub mod interface;
pub mod keywords;
pub mod parser;
pub mod request;
pub mod scripted;

// Re-export the main types for easy access
pub use gateway::PromptGateway;
pub use interface::*;
pub use request::{PromptOutcome, PromptRequest, PromptValue};
pub use scripted::{Script, ScriptedSession};

