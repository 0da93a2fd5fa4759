//! Config reading and merging
//!
//! Reads every discovered config file, extracts its `allowedDirectories`
//! entries, and unions them into a single de-duplicated set. A file that
//! cannot be read or parsed is logged and skipped; it never aborts the
//! remaining files.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;

use crate::core::{PluginError, PluginResult};

use super::locator::ConfigLocator;

/// Key holding the directory list inside a config file
pub const ALLOWED_DIRECTORIES_KEY: &str = "allowedDirectories";

/// Load and merge allowed directories from every discovered config file.
///
/// Entries are de-duplicated by exact string comparison; no normalization
/// happens at this stage. Sources are equally additive — discovery order
/// only affects log order, not the resulting set.
pub async fn load_allowed_directories(locator: &ConfigLocator) -> BTreeSet<String> {
    let files = locator.find_config_files().await;

    if files.is_empty() {
        tracing::info!("No allowlist config files found");
        return BTreeSet::new();
    }

    let mut merged = BTreeSet::new();

    for file in &files {
        match read_config_file(file).await {
            Ok(dirs) => {
                if !dirs.is_empty() {
                    tracing::info!(
                        "Loaded {} allowed directories from {}",
                        dirs.len(),
                        file.display()
                    );
                }
                merged.extend(dirs);
            }
            Err(e) => {
                tracing::error!("Skipping config file {}: {}", file.display(), e);
            }
        }
    }

    tracing::info!("Merged allowlist contains {} unique directories", merged.len());

    merged
}

/// Read one config file and extract its directory list.
async fn read_config_file(path: &Path) -> PluginResult<Vec<String>> {
    let contents = tokio::fs::read_to_string(path).await?;
    let value: Value = serde_json::from_str(&contents)?;

    if !value.is_object() {
        return Err(PluginError::invalid_config(
            "top-level value is not an object",
        ));
    }

    Ok(extract_allowed_directories(&value))
}

/// Pull `allowedDirectories` out of a parsed config.
///
/// Anything other than an array contributes nothing, and non-string array
/// elements are dropped.
fn extract_allowed_directories(value: &Value) -> Vec<String> {
    value
        .get(ALLOWED_DIRECTORIES_KEY)
        .and_then(|v| v.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn locator_for(files: Vec<PathBuf>) -> ConfigLocator {
        // Start == boundary at a dir that holds no local config, so every
        // file under test comes in as a "global" candidate and the tests
        // control the exact list.
        let empty = std::env::temp_dir().join("opencode-allowlist-loader-tests");
        ConfigLocator::new(&empty, &empty).with_global_candidates(files)
    }

    #[tokio::test]
    async fn test_two_configs_merge_to_two_entries() {
        let temp = TempDir::new().unwrap();
        let a = write_file(temp.path(), "a.json", r#"{ "allowedDirectories": ["/one"] }"#);
        let b = write_file(temp.path(), "b.json", r#"{ "allowedDirectories": ["/two"] }"#);

        let merged = load_allowed_directories(&locator_for(vec![a, b])).await;
        assert_eq!(merged.len(), 2);
        assert!(merged.contains("/one"));
        assert!(merged.contains("/two"));
    }

    #[tokio::test]
    async fn test_duplicates_across_configs_collapse() {
        let temp = TempDir::new().unwrap();
        let a = write_file(
            temp.path(),
            "a.json",
            r#"{ "allowedDirectories": ["/shared", "/only-a"] }"#,
        );
        let b = write_file(
            temp.path(),
            "b.json",
            r#"{ "allowedDirectories": ["/shared"] }"#,
        );

        let merged = load_allowed_directories(&locator_for(vec![a, b])).await;
        assert_eq!(merged.len(), 2);
    }

    #[tokio::test]
    async fn test_merge_is_order_independent() {
        let temp = TempDir::new().unwrap();
        let a = write_file(temp.path(), "a.json", r#"{ "allowedDirectories": ["/one"] }"#);
        let b = write_file(temp.path(), "b.json", r#"{ "allowedDirectories": ["/two"] }"#);

        let forward = load_allowed_directories(&locator_for(vec![a.clone(), b.clone()])).await;
        let reverse = load_allowed_directories(&locator_for(vec![b, a])).await;
        assert_eq!(forward, reverse);
    }

    #[tokio::test]
    async fn test_malformed_config_does_not_block_valid_ones() {
        let temp = TempDir::new().unwrap();
        let bad = write_file(temp.path(), "bad.json", "{ not valid json");
        let good = write_file(
            temp.path(),
            "good.json",
            r#"{ "allowedDirectories": ["/kept"] }"#,
        );

        let merged = load_allowed_directories(&locator_for(vec![bad, good])).await;
        assert_eq!(merged.len(), 1);
        assert!(merged.contains("/kept"));
    }

    #[tokio::test]
    async fn test_non_object_top_level_is_skipped() {
        let temp = TempDir::new().unwrap();
        let bad = write_file(temp.path(), "bad.json", r#"["not", "an", "object"]"#);

        let merged = load_allowed_directories(&locator_for(vec![bad])).await;
        assert!(merged.is_empty());
    }

    #[tokio::test]
    async fn test_absent_or_empty_directory_list_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        let absent = write_file(temp.path(), "absent.json", r#"{ "other": true }"#);
        let empty = write_file(
            temp.path(),
            "empty.json",
            r#"{ "allowedDirectories": [] }"#,
        );

        let merged = load_allowed_directories(&locator_for(vec![absent, empty])).await;
        assert!(merged.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_typed_directory_list_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        let wrong = write_file(
            temp.path(),
            "wrong.json",
            r#"{ "allowedDirectories": "/not-an-array" }"#,
        );

        let merged = load_allowed_directories(&locator_for(vec![wrong])).await;
        assert!(merged.is_empty());
    }

    #[tokio::test]
    async fn test_non_string_entries_are_dropped() {
        let temp = TempDir::new().unwrap();
        let mixed = write_file(
            temp.path(),
            "mixed.json",
            r#"{ "allowedDirectories": ["/real", 42, null, {"x": 1}] }"#,
        );

        let merged = load_allowed_directories(&locator_for(vec![mixed])).await;
        assert_eq!(merged.len(), 1);
        assert!(merged.contains("/real"));
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        let temp = TempDir::new().unwrap();
        let file = write_file(
            temp.path(),
            "extra.json",
            r#"{ "allowedDirectories": ["/dir"], "version": 3, "notes": "hi" }"#,
        );

        let merged = load_allowed_directories(&locator_for(vec![file])).await;
        assert_eq!(merged.len(), 1);
    }

    #[tokio::test]
    async fn test_no_files_yields_empty_set() {
        let merged = load_allowed_directories(&locator_for(Vec::new())).await;
        assert!(merged.is_empty());
    }
}
