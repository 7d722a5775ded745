use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::menu;
use crate::{Tool, ToolError};

/// Menu lookup tool - resolves a meal category to its dish list.
#[derive(Debug, Default)]
pub struct MenuLookupTool;

impl MenuLookupTool {
    pub fn new() -> Self {
        Self
    }
}

/// Typed arguments for the menu lookup call.
///
/// `category` defaults to empty so malformed arguments degrade to the
/// catalog's fallback message instead of an error.
#[derive(Debug, Default, Deserialize)]
struct MenuLookupArgs {
    #[serde(default)]
    category: String,
}

#[async_trait]
impl Tool for MenuLookupTool {
    fn name(&self) -> &str {
        "menu_lookup"
    }

    fn description(&self) -> &str {
        "Look up what is being served for a meal. Use this when the user asks \
         about the breakfast, lunch, evening snacks, or dinner menu."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "Meal period to look up: breakfast, lunch, evening, or dinner"
                }
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String, ToolError> {
        // Any input, including junk, yields a displayable string.
        let args: MenuLookupArgs = serde_json::from_value(args).unwrap_or_default();
        Ok(menu::lookup(&args.category))
    }
}
