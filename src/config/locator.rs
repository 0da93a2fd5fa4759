//! Config file discovery
//!
//! Finds allowlist config files with two independent strategies:
//! - fixed global locations under the user's home directory
//! - an ancestor walk from the start directory up to the boundary directory

use std::path::{Path, PathBuf};

/// Directory probed in each ancestor
pub const CONFIG_DIR_NAME: &str = ".opencode";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "opencode-allowlist.json";

/// Locates allowlist config files on disk
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    start_dir: PathBuf,
    boundary_dir: PathBuf,
    global_candidates: Vec<PathBuf>,
}

impl ConfigLocator {
    /// Create a locator with global candidates derived from the environment
    pub fn new(start_dir: impl Into<PathBuf>, boundary_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            boundary_dir: boundary_dir.into(),
            global_candidates: default_global_candidates(),
        }
    }

    /// Replace the fixed global candidate paths
    ///
    /// Tests use this to point the locator at a temp directory instead of
    /// the real home directory.
    pub fn with_global_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.global_candidates = candidates;
        self
    }

    /// Get the start directory
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Get the boundary directory
    pub fn boundary_dir(&self) -> &Path {
        &self.boundary_dir
    }

    /// Find every config file that exists, in discovery order.
    ///
    /// Global candidates come first, in their fixed order, then ancestors
    /// from the start directory up to the boundary directory. The walk also
    /// stops at the filesystem root when the boundary is not an ancestor of
    /// the start directory. Zero matches is a normal result, not an error.
    pub async fn find_config_files(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();

        for candidate in &self.global_candidates {
            if path_exists(candidate).await {
                found.push(candidate.clone());
            }
        }

        let mut current = self.start_dir.clone();
        loop {
            let candidate = current.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if path_exists(&candidate).await {
                found.push(candidate);
            }

            if current == self.boundary_dir {
                break;
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent.to_path_buf(),
                _ => break,
            }
        }

        found
    }
}

/// The two fixed global config locations under the user's home directory.
fn default_global_candidates() -> Vec<PathBuf> {
    let home = home_dir();
    vec![
        home.join(".config").join("opencode").join(CONFIG_FILE_NAME),
        home.join(".local")
            .join("share")
            .join("opencode")
            .join("config")
            .join(CONFIG_FILE_NAME),
    ]
}

/// Home directory from the environment, degrading to a literal `~` when
/// neither variable is set.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("~"))
}

async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
