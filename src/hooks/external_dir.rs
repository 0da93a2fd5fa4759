//! External-directory permission hook
//!
//! Auto-approves `external_directory` permission requests whose target path
//! falls under one of the configured allowed directories. Every other
//! request passes through untouched.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{AuthorizationDecision, PluginContext};

use super::types::{HookOutput, HookStatus, PermissionRequest};

/// Trait for permission hooks the host invokes on each request
///
/// Hooks are async because a decision may need to load configuration from
/// disk on first use.
#[async_trait]
pub trait PermissionHook: Send + Sync {
    /// Inspect a permission request and optionally write an output status.
    async fn on_permission_ask(&self, request: &PermissionRequest, output: &mut HookOutput);
}

/// Hook that approves requests under configured allowed directories
pub struct ExternalDirectoryHook {
    ctx: Arc<PluginContext>,
}

impl ExternalDirectoryHook {
    /// Create a hook backed by the given context
    pub fn new(ctx: Arc<PluginContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl PermissionHook for ExternalDirectoryHook {
    async fn on_permission_ask(&self, request: &PermissionRequest, output: &mut HookOutput) {
        let decision = self
            .ctx
            .authorize(&request.kind, request.target_path())
            .await;

        if decision == AuthorizationDecision::Allow {
            output.status = Some(HookStatus::Allow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_config(dir: &Path, allowed: &[&str]) {
        let config_dir = dir.join(".opencode");
        fs::create_dir_all(&config_dir).unwrap();
        let body = serde_json::json!({ "allowedDirectories": allowed });
        fs::write(
            config_dir.join("opencode-allowlist.json"),
            body.to_string(),
        )
        .unwrap();
    }

    fn hook_for(dir: &Path) -> ExternalDirectoryHook {
        let ctx = PluginContext::new(dir, dir).with_global_candidates(Vec::new());
        ExternalDirectoryHook::new(Arc::new(ctx))
    }

    fn request(kind: &str, metadata: serde_json::Value) -> PermissionRequest {
        serde_json::from_value(json!({ "type": kind, "metadata": metadata })).unwrap()
    }

    #[tokio::test]
    async fn test_allows_request_under_configured_directory() {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        write_config(temp.path(), &[projects.to_str().unwrap()]);

        let hook = hook_for(temp.path());
        let req = request(
            "external_directory",
            json!({ "parentDir": projects.join("app").to_str().unwrap() }),
        );

        let mut output = HookOutput::new();
        hook.on_permission_ask(&req, &mut output).await;
        assert!(output.is_allowed());
    }

    #[tokio::test]
    async fn test_leaves_output_untouched_for_unmatched_path() {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        write_config(temp.path(), &[projects.to_str().unwrap()]);

        let hook = hook_for(temp.path());
        let req = request(
            "external_directory",
            json!({ "parentDir": temp.path().join("other").to_str().unwrap() }),
        );

        let mut output = HookOutput::new();
        hook.on_permission_ask(&req, &mut output).await;
        assert!(output.status.is_none());
    }

    #[tokio::test]
    async fn test_leaves_output_untouched_for_other_request_kinds() {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        write_config(temp.path(), &[projects.to_str().unwrap()]);

        let hook = hook_for(temp.path());
        let req = request(
            "bash",
            json!({ "parentDir": projects.to_str().unwrap() }),
        );

        let mut output = HookOutput::new();
        hook.on_permission_ask(&req, &mut output).await;
        assert!(output.status.is_none());
    }

    #[tokio::test]
    async fn test_falls_back_to_file_path_metadata() {
        let temp = TempDir::new().unwrap();
        let projects = temp.path().join("projects");
        write_config(temp.path(), &[projects.to_str().unwrap()]);

        let hook = hook_for(temp.path());
        let req = request(
            "external_directory",
            json!({ "filePath": projects.join("file.ts").to_str().unwrap() }),
        );

        let mut output = HookOutput::new();
        hook.on_permission_ask(&req, &mut output).await;
        assert!(output.is_allowed());
    }
}
