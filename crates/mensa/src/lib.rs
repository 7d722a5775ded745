//! # Mensa — menu-aware LLM chat assistant
//!
//! Mensa answers canteen-menu questions by letting a hosted language
//! model call a local lookup tool over a static menu catalog.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mensa::prelude::*;
//!
//! let client = LlmClient::new("gpt-4o-mini");
//! let tools = ToolRegistry::with_defaults();
//! let agent = AgentExecutor::new(client, tools);
//!
//! let result = agent.ask("what's for dinner?").await?;
//! println!("{}", result.output.unwrap_or_default());
//! ```
//!
//! ## Crate Structure
//!
//! | Crate | Description |
//! |-------|-------------|
//! | [`mensa_core`] | Error types, tool calls, agent results |
//! | [`mensa_llm`] | OpenAI-compatible chat client with tool calling |
//! | [`mensa_tools`] | Tool registry, menu catalog, menu lookup tool |
//! | [`mensa_agent`] | Bounded tool-calling reasoning loop |

// Re-export core types
pub use mensa_core::{AgentError, AgentResult, AgentStep, ToolCall, ToolSchema};

// Re-export LLM client
pub use mensa_llm::{ChatResponse, LlmClient, LlmMetrics, LlmResponse};

// Re-export tools
pub use mensa_tools::{menu, MenuLookupTool, Tool, ToolError, ToolRegistry};

// Re-export agent
pub use mensa_agent::{
    Agent, AgentExecutor, DEFAULT_MAX_ITERATIONS, DEFAULT_SYSTEM_PROMPT, MAX_ITERATIONS_MESSAGE,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use mensa::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{AgentError, AgentResult, AgentStep, ToolCall, ToolSchema};

    // LLM
    pub use crate::{ChatResponse, LlmClient, LlmResponse};

    // Tools
    pub use crate::{MenuLookupTool, Tool, ToolError, ToolRegistry};

    // Agent
    pub use crate::{Agent, AgentExecutor};
}
