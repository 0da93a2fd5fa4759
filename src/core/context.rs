//! Plugin context
//!
//! Owns everything the shim needs for the life of the hosting process: the
//! directories it was initialized with, the path match mode, and the
//! memoized merged allowlist. Hosts create one context at startup and share
//! it (typically behind an `Arc`) across permission checks.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::authz::{MatchMode, PathAuthorizer};
use crate::config::{load_allowed_directories, ConfigLocator};

/// Request kind the shim acts on; every other kind is deferred untouched.
pub const EXTERNAL_DIRECTORY_KIND: &str = "external_directory";

/// Outcome of an authorization check
///
/// The shim never denies. A miss simply leaves the request to the host's
/// default prompt flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    /// Auto-approve the request
    Allow,
    /// Express no opinion
    Defer,
}

/// Long-lived plugin state
///
/// The merged allowlist is loaded lazily on first use and then treated as
/// immutable for the remaining life of the context. There is no mutation or
/// refresh API: only out-of-band edits to the config files change behavior,
/// and those require a restart to take effect.
pub struct PluginContext {
    locator: ConfigLocator,
    match_mode: MatchMode,
    allowed_dirs: OnceLock<BTreeSet<String>>,
}

impl PluginContext {
    /// Create a context searching from `start_dir` up to `boundary_dir`.
    ///
    /// Both directories are supplied by the hosting environment: the start
    /// directory is where the agent is working, the boundary is the
    /// workspace/worktree root beyond which the ancestor search stops.
    pub fn new(start_dir: impl Into<PathBuf>, boundary_dir: impl Into<PathBuf>) -> Self {
        Self {
            locator: ConfigLocator::new(start_dir, boundary_dir),
            match_mode: MatchMode::Boundary,
            allowed_dirs: OnceLock::new(),
        }
    }

    /// Override the path match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Replace the fixed global config candidates (tests point these at a
    /// temp directory instead of the real home).
    pub fn with_global_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.locator = self.locator.with_global_candidates(candidates);
        self
    }

    /// The merged allowed-directory set, loaded once per context lifetime.
    ///
    /// Racing first callers may each perform the load; the first completed
    /// result is published and every later call returns it without touching
    /// the filesystem. The load is a pure function of on-disk state, so
    /// racers converge on the same value.
    pub async fn allowed_directories(&self) -> &BTreeSet<String> {
        if let Some(dirs) = self.allowed_dirs.get() {
            return dirs;
        }

        let loaded = load_allowed_directories(&self.locator).await;
        self.allowed_dirs.get_or_init(|| loaded)
    }

    /// Decide a permission request.
    ///
    /// Only `external_directory` requests that carry a target path can be
    /// approved; everything else defers so the host's own permission flow
    /// applies.
    pub async fn authorize(&self, kind: &str, target: Option<&str>) -> AuthorizationDecision {
        if kind != EXTERNAL_DIRECTORY_KIND {
            return AuthorizationDecision::Defer;
        }

        let Some(target) = target else {
            tracing::debug!("Permission request has no target path, deferring");
            return AuthorizationDecision::Defer;
        };

        let allowed = self.allowed_directories().await;
        let authorizer = PathAuthorizer::new(self.match_mode);

        if authorizer.is_allowed(target, allowed) {
            tracing::info!("Auto-approving access to {}", target);
            AuthorizationDecision::Allow
        } else {
            AuthorizationDecision::Defer
        }
    }
}

impl std::fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext")
            .field("locator", &self.locator)
            .field("match_mode", &self.match_mode)
            .field("loaded", &self.allowed_dirs.get().is_some())
            .finish()
    }
}
