//! Tool registry and the built-in menu lookup tool for mensa.
//!
//! This crate provides the tool abstraction for LLM function calling:
//!
//! - [`Tool`] — Trait for implementing tools
//! - [`ToolRegistry`] — Registry for managing available tools
//! - [`MenuLookupTool`] — Built-in lookup over the static menu catalog
//! - [`menu`] — The catalog itself (pure data plus normalization)
//!
//! # Implementing a Custom Tool
//!
//! ```rust,ignore
//! use mensa_tools::{Tool, ToolError};
//! use async_trait::async_trait;
//!
//! struct OpeningHoursTool;
//!
//! #[async_trait]
//! impl Tool for OpeningHoursTool {
//!     fn name(&self) -> &str { "opening_hours" }
//!     fn description(&self) -> &str { "Returns the canteen opening hours" }
//!     fn parameters(&self) -> serde_json::Value {
//!         serde_json::json!({ "type": "object", "properties": {} })
//!     }
//!     async fn execute(&self, _args: serde_json::Value) -> Result<String, ToolError> {
//!         Ok("Open 7:30-21:00, every day.".to_string())
//!     }
//! }
//! ```

pub mod menu;
mod menu_lookup;

pub use menu_lookup::MenuLookupTool;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub use mensa_core::{ToolCall, ToolSchema};

/// Errors that can occur during tool execution.
///
/// The built-in menu tool never fails; these variants are the error
/// surface for external [`Tool`] implementations. The agent loop turns
/// them into error-text observations rather than aborting.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Tool execution failed with a message.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    /// Invalid arguments were passed to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Trait for implementing tools that can be called by the model.
///
/// Tools are the bridge between LLM reasoning and local capabilities.
/// The name, description, and parameter schema are what the model's
/// reasoning loop consumes to decide whether and when to call a tool;
/// the tool itself carries no decision logic.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a description of what this tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for this tool's parameters.
    fn parameters(&self) -> serde_json::Value;

    /// Executes the tool with the given arguments.
    ///
    /// # Arguments
    /// * `args` - JSON object containing the tool arguments
    ///
    /// # Returns
    /// The tool's output as a string, or an error.
    async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError>;

    /// Generates the schema for this tool (default implementation).
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Registry of tools available to the agent.
///
/// The registry manages tool instances and provides schemas for LLM
/// function calling.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates a registry with the default built-in tools.
    ///
    /// Includes `menu_lookup`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MenuLookupTool::new());
        registry
    }

    /// Registers a tool in the registry.
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Returns schemas for all registered tools.
    pub fn list(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Returns true if a tool with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}
