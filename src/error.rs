//! Error types and result aliases for the agentrun library.
//!
//! This module defines the core error type [`AgentRunError`] and the [`Result`] type alias
//! used throughout the library. All public APIs that can fail return `Result<T>` for
//! consistent error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentRunError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("LLM gateway error: {0}")]
    GatewayError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Tool error: {0}")]
    ToolError(String),

    #[error("Agent error: {0}")]
    AgentError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Run exceeded maximum of {0} turns")]
    MaxTurnsExceeded(usize),
}

pub type Result<T> = std::result::Result<T, AgentRunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AgentRunError::ConfigError("missing API key".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: missing API key");
    }

    #[test]
    fn test_gateway_error_display() {
        let err = AgentRunError::GatewayError("connection failed".to_string());
        assert_eq!(err.to_string(), "LLM gateway error: connection failed");
    }

    #[test]
    fn test_tool_error_display() {
        let err = AgentRunError::ToolError("invalid parameters".to_string());
        assert_eq!(err.to_string(), "Tool error: invalid parameters");
    }

    #[test]
    fn test_max_turns_display() {
        let err = AgentRunError::MaxTurnsExceeded(10);
        assert_eq!(err.to_string(), "Run exceeded maximum of 10 turns");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: AgentRunError = json_err.into();

        match err {
            AgentRunError::SerializationError(_) => {}
            _ => panic!("Expected SerializationError"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: AgentRunError = io_err.into();

        match err {
            AgentRunError::IoError(_) => {}
            _ => panic!("Expected IoError"),
        }
    }

    #[test]
    fn test_error_debug() {
        let err = AgentRunError::AgentError("unknown handoff".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("AgentError"));
    }
}
