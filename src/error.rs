//! Error types for rs-mdcopy.
//!
//! The tree walker itself never fails: every rule has an empty-output
//! fallback. Errors only arise at the document-level entry points, where a
//! root has to be located and configuration has to be loaded.

/// Error type for document-level extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured root selector is not valid CSS.
    #[error("Invalid root selector: {0}")]
    InvalidSelector(String),

    /// The configured root selector matched nothing in the document.
    #[error("No element matches root selector: {0}")]
    RootNotFound(String),

    /// Options could not be deserialized.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A result could not be serialized for output.
    #[error("Failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"x\"").expect_err("not a number")
    }

    #[test]
    fn test_config_and_serialize_messages_differ() {
        let config: Error = json_error().into();
        assert!(config.to_string().starts_with("Invalid configuration"));

        let output = Error::Serialize(json_error());
        assert!(output.to_string().starts_with("Failed to serialize result"));
        assert!(std::error::Error::source(&output).is_some());
    }
}
