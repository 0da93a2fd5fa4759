//! List-allowed-directories tool
//!
//! Read-only informational query over the merged allowlist. Reports the
//! configured directories, or a help message with example config content
//! when nothing is configured. There is deliberately no mutation
//! counterpart: the allowlist only changes through config files on disk.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::core::PluginContext;

use super::tool::{Tool, ToolDefinition, ToolResult};

/// Tool name as advertised to the host
pub const LIST_TOOL_NAME: &str = "list_allowed_directories";

/// Read-only tool that reports the merged allowlist
pub struct ListAllowedDirectoriesTool {
    ctx: Arc<PluginContext>,
}

impl ListAllowedDirectoriesTool {
    /// Create a tool backed by the given context
    pub fn new(ctx: Arc<PluginContext>) -> Self {
        Self { ctx }
    }

    /// Render the listing shown to the agent.
    async fn render(&self) -> String {
        let dirs = self.ctx.allowed_directories().await;

        if dirs.is_empty() {
            return "No allowed directories are configured.\n\n\
                Create .opencode/opencode-allowlist.json in your project or a \
                parent directory with content like:\n\n\
                {\n  \"allowedDirectories\": [\n    \"/absolute/path/to/directory\"\n  ]\n}\n"
                .to_string();
        }

        let mut listing = String::from("Allowed directories:\n");
        for dir in dirs {
            listing.push_str("  ");
            listing.push_str(dir);
            listing.push('\n');
        }
        listing
    }
}

#[async_trait]
impl Tool for ListAllowedDirectoriesTool {
    fn name(&self) -> &str {
        LIST_TOOL_NAME
    }

    fn description(&self) -> &str {
        "List the directories where file-system access is auto-approved."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: LIST_TOOL_NAME.to_string(),
            description: "Lists the directories for which file-system access is \
                automatically approved. Directories are configured in \
                opencode-allowlist.json files; this tool takes no arguments."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _input: &Value) -> Result<ToolResult> {
        Ok(ToolResult::success(self.render().await))
    }

    fn requires_permission(&self) -> bool {
        false // Read-only operation
    }
}
