//! Allowlist configuration
//!
//! This module provides:
//! - `ConfigLocator` - Discovers allowlist config files on disk
//! - `load_allowed_directories` - Reads and merges every discovered config
//!
//! Config files are JSON objects with one recognized field:
//!
//! ```json
//! { "allowedDirectories": ["/absolute/path"] }
//! ```
//!
//! Unknown fields are ignored. A file that cannot be read or parsed drops
//! only its own contribution.

mod loader;
mod locator;

pub use loader::{load_allowed_directories, ALLOWED_DIRECTORIES_KEY};
pub use locator::{ConfigLocator, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
