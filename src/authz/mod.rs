//! Path authorization
//!
//! This module provides:
//! - `PathAuthorizer` - Checks requested paths against the merged allowlist
//! - `MatchMode` - Boundary-checked matching (default) or the historical
//!   bare-prefix comparison
//! - `normalize_path` - Lexical path normalization shared by both sides of
//!   the comparison

mod authorizer;

pub use authorizer::{normalize_path, MatchMode, PathAuthorizer};
