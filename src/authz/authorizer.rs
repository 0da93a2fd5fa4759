//! Path authorization checks
//!
//! Decides whether a requested path falls under one of the allowed
//! directories. Comparison is purely lexical: both sides are normalized
//! against a base directory without touching the filesystem — `.` segments
//! are dropped, `..` segments pop, symlinks are not resolved.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// How allowed-directory prefixes are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The requested path must equal the allowed directory or sit below it
    /// (prefix followed by a path separator). Default.
    #[default]
    Boundary,

    /// Bare string-prefix comparison: `/a/b` also matches `/a/bc/file`.
    /// Kept for installations that rely on the historical behavior.
    LegacyPrefix,
}

/// Checks requested paths against the merged allowlist
#[derive(Debug, Clone)]
pub struct PathAuthorizer {
    mode: MatchMode,
    base_dir: PathBuf,
}

impl PathAuthorizer {
    /// Create an authorizer resolving relative paths against the process
    /// working directory.
    pub fn new(mode: MatchMode) -> Self {
        let base_dir =
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from(MAIN_SEPARATOR_STR));
        Self { mode, base_dir }
    }

    /// Create an authorizer with an explicit base directory.
    pub fn with_base_dir(mode: MatchMode, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            base_dir: base_dir.into(),
        }
    }

    /// True when the requested path falls under any allowed directory.
    ///
    /// Short-circuits on the first match. An empty set never matches.
    pub fn is_allowed(&self, requested: &str, allowed: &BTreeSet<String>) -> bool {
        let requested = normalize_path(Path::new(requested), &self.base_dir);

        for dir in allowed {
            let dir = normalize_path(Path::new(dir), &self.base_dir);
            if self.matches(&requested, &dir) {
                tracing::debug!(
                    "{} matched allowed directory {}",
                    requested.display(),
                    dir.display()
                );
                return true;
            }
        }

        false
    }

    fn matches(&self, requested: &Path, dir: &Path) -> bool {
        match self.mode {
            // Component-wise containment: equality counts, and sibling
            // directories sharing a name prefix do not.
            MatchMode::Boundary => requested.starts_with(dir),
            MatchMode::LegacyPrefix => requested
                .to_string_lossy()
                .starts_with(&*dir.to_string_lossy()),
        }
    }
}

/// Normalize a path lexically.
///
/// Relative paths are resolved against `base`, `.` segments are dropped,
/// and `..` segments pop the previous component (a `..` at the root is
/// dropped). Trailing separators do not survive normalization. The
/// filesystem is never consulted.
pub fn normalize_path(path: &Path, base: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    normalized
}
