//! Core types for the allowlist plugin
//!
//! This module provides the fundamental types used throughout the crate:
//! - `PluginContext` - Long-lived state: search roots + memoized allowlist
//! - `AuthorizationDecision` - Allow / defer outcome of a check
//! - `PluginError` - Error types

pub mod context;
pub mod error;

pub use context::{AuthorizationDecision, PluginContext, EXTERNAL_DIRECTORY_KIND};
pub use error::{PluginError, PluginResult};
