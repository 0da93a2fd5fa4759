//! Plugin error types

use thiserror::Error;

/// Errors that can occur while loading allowlist configuration
#[derive(Error, Debug)]
pub enum PluginError {
    /// IO error reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error in a config file
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file parsed but had an unexpected shape
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PluginError {
    /// Create an invalid-configuration error from a string
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        PluginError::InvalidConfig(msg.into())
    }
}

/// Result type alias for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluginError::invalid_config("top-level value is not an object");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: top-level value is not an object"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let plugin_err: PluginError = io_err.into();
        assert!(matches!(plugin_err, PluginError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let plugin_err: PluginError = json_err.into();
        assert!(matches!(plugin_err, PluginError::Json(_)));
    }
}
