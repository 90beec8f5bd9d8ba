//! Error types for the text summarization server
//!
//! The summarizer core itself cannot fail on well-typed input; these errors
//! cover configuration, argument validation, and the MCP boundary.

use thiserror::Error;

/// Main error type for the text summarization server
#[derive(Error, Debug)]
pub enum TextSumError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Faults raised while summarizing
    #[error("Summarization error: {0}")]
    Summarization(#[from] SummarizationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value:?}")]
    InvalidEnvVar { var: String, value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Tool argument validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid parameter: {name} - {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },
}

/// Unexpected faults caught at the boundary while running the summarizer
#[derive(Error, Debug)]
pub enum SummarizationError {
    #[error("summarizer panicked: {message}")]
    Panicked { message: String },
}

/// Result type alias for text summarization operations
pub type Result<T> = std::result::Result<T, TextSumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::InputTooLarge {
            size: 2048,
            limit: 1024,
        };
        let text = err.to_string();
        assert!(text.contains("2048"));
        assert!(text.contains("1024"));
    }

    #[test]
    fn test_error_conversion() {
        let mcp_err = McpError::UnknownTool {
            name: "translate".to_string(),
        };
        let err: TextSumError = mcp_err.into();
        assert!(matches!(err, TextSumError::Mcp(_)));
        assert!(err.to_string().contains("Unknown tool: translate"));
    }

    #[test]
    fn test_config_error_names_variable() {
        let err: TextSumError = ConfigError::InvalidEnvVar {
            var: "TEXTSUM_MAX_SENTENCES".to_string(),
            value: "ten".to_string(),
        }
        .into();
        assert!(err.to_string().contains("TEXTSUM_MAX_SENTENCES"));
        assert!(err.to_string().contains("\"ten\""));
    }
}
