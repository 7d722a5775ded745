//! Core domain types and error definitions for mensa.
//!
//! This crate provides the fundamental types shared across the mensa service:
//!
//! - [`AgentError`] — Error type for agent and LLM operations
//! - [`ToolCall`] and [`ToolSchema`] — Tool interaction types
//! - [`AgentStep`] and [`AgentResult`] — The agent's reasoning trace
//!
//! # Example
//!
//! ```rust
//! use mensa_core::{AgentResult, AgentStep, ToolCall};
//!
//! let result = AgentResult {
//!     output: Some("The dinner menu is Biryani, Raita, Papad, Salad.".to_string()),
//!     intermediate_steps: vec![AgentStep {
//!         action: ToolCall {
//!             id: "call_1".to_string(),
//!             name: "menu_lookup".to_string(),
//!             arguments: serde_json::json!({ "category": "dinner" }),
//!         },
//!         observation: Some("Biryani, Raita, Papad, Salad".to_string()),
//!     }],
//! };
//! assert!(result.output.is_some());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during agent execution or LLM operations.
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM API request failed (transport, auth, or malformed response).
    #[error("LLM request failed: {0}")]
    LlmError(String),
}

/// A tool call requested by the LLM.
///
/// When the model decides to use a tool, it returns one or more `ToolCall`
/// instances with the tool name and arguments to execute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call (used to match results).
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments to pass to the tool (JSON object).
    pub arguments: serde_json::Value,
}

/// JSON schema describing a tool for LLM function calling.
///
/// This follows the OpenAI function calling format and is used
/// to inform the model about available tools and their parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique name of the tool (e.g., "menu_lookup").
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema object describing the tool's parameters.
    pub parameters: serde_json::Value,
}

/// One recorded (tool invocation, tool result) pair from the agent's
/// reasoning loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStep {
    /// The tool call the model requested.
    pub action: ToolCall,
    /// What the tool produced. Optional: callers must not assume a
    /// step carries an observation.
    #[serde(default)]
    pub observation: Option<String>,
}

/// Result of one agent run: a possible final answer plus the ordered
/// trace of tool invocations made along the way.
///
/// Callers treat this as partial: `output` may be absent, or present
/// but carry the loop's own give-up message rather than an answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentResult {
    /// Final text produced by the model, if any.
    #[serde(default)]
    pub output: Option<String>,
    /// Tool call/observation pairs recorded during the run, in order.
    #[serde(default)]
    pub intermediate_steps: Vec<AgentStep>,
}

impl AgentResult {
    /// Creates a result carrying only a final answer.
    pub fn answered(output: impl Into<String>) -> Self {
        Self { output: Some(output.into()), intermediate_steps: Vec::new() }
    }

    /// Returns the observation of the last recorded step, if any.
    pub fn last_observation(&self) -> Option<&str> {
        self.intermediate_steps
            .last()
            .and_then(|step| step.observation.as_deref())
    }
}
