//! Hook wire types
//!
//! Serde shapes for the host's permission request and the hook's output
//! slot. The host owns both; the shim only ever reads the request and may
//! write an `allow` status.

use serde::{Deserialize, Serialize};

/// A permission request as delivered by the host
///
/// Read-only input to the hook. Unknown metadata fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionRequest {
    /// Request kind; only `external_directory` is acted on
    #[serde(rename = "type")]
    pub kind: String,

    /// Metadata carrying the target path for directory requests
    #[serde(default)]
    pub metadata: PermissionMetadata,
}

/// Metadata attached to a permission request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionMetadata {
    /// Directory the request is about
    pub parent_dir: Option<String>,

    /// File the request is about, consulted when no directory was given
    pub file_path: Option<String>,
}

impl PermissionRequest {
    /// Target path of this request: the parent directory when present,
    /// falling back to the file path.
    pub fn target_path(&self) -> Option<&str> {
        self.metadata
            .parent_dir
            .as_deref()
            .or(self.metadata.file_path.as_deref())
    }
}

/// Status a hook may write back to the host
///
/// There is deliberately no deny arm: the shim either approves or stays
/// silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookStatus {
    /// Auto-approve the request
    Allow,
}

/// Mutable output slot for a permission hook
///
/// `status` left as `None` means the hook expressed no opinion and the
/// host's default prompt flow applies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HookOutput {
    /// Decision, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HookStatus>,
}

impl HookOutput {
    /// Create an empty output slot
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a hook approved the request
    pub fn is_allowed(&self) -> bool {
        self.status == Some(HookStatus::Allow)
    }
}
