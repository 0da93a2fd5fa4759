//! Tool trait definition

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of executing a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The output of the tool
    pub output: String,
    /// Whether the tool execution resulted in an error
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    /// Create an error tool result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            is_error: true,
        }
    }
}

/// Definition of a tool as advertised to the host
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Name of the tool
    pub name: String,
    /// Description shown to the agent
    pub description: String,
    /// JSON schema for the tool input
    pub input_schema: Value,
}

/// Trait for tools the host agent can use
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of this tool
    fn name(&self) -> &str;

    /// Get a description of this tool
    fn description(&self) -> &str;

    /// Get the tool definition advertised to the host
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given input
    async fn execute(&self, input: &Value) -> Result<ToolResult>;

    /// Check if this tool requires permission before execution
    ///
    /// Default is true - tools should generally require permission.
    fn requires_permission(&self) -> bool {
        true
    }
}
