//! Permission hook surface
//!
//! Adapts the host's permission-request shape to the core authorization
//! boundary.
//!
//! # Overview
//!
//! The host delivers a `PermissionRequest` and a mutable `HookOutput` to
//! every registered hook. `ExternalDirectoryHook` inspects
//! `external_directory` requests and writes `status: "allow"` when the
//! target path falls under a configured allowed directory. It never writes
//! anything else: a miss leaves the output untouched so the host's default
//! prompt flow applies.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use opencode_allowlist::core::PluginContext;
//! use opencode_allowlist::hooks::{ExternalDirectoryHook, HookOutput, PermissionHook};
//!
//! let ctx = Arc::new(PluginContext::new(project_dir, worktree_root));
//! let hook = ExternalDirectoryHook::new(ctx);
//!
//! let mut output = HookOutput::new();
//! hook.on_permission_ask(&request, &mut output).await;
//! if output.is_allowed() {
//!     // host skips its permission prompt
//! }
//! ```

mod external_dir;
mod types;

pub use external_dir::{ExternalDirectoryHook, PermissionHook};
pub use types::{HookOutput, HookStatus, PermissionMetadata, PermissionRequest};
