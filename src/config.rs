//! Model endpoint and run configuration.
//!
//! Nothing here is global: the host builds a [`ModelConfig`], turns it into a gateway,
//! and passes a [`RunConfig`] to each run explicitly.

use crate::error::{AgentRunError, Result};
use crate::llm::CompletionConfig;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const BASE_URL_VAR: &str = "AGENTRUN_BASE_URL";
const MODEL_VAR: &str = "AGENTRUN_MODEL";

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl ModelConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout: None,
        }
    }

    /// Load configuration from the environment, reading a `.env` file first if present.
    ///
    /// Fails with [`AgentRunError::ConfigError`] when `GEMINI_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self> {
        if dotenv::dotenv().is_err() {
            debug!("No .env file found, using process environment");
        }
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            AgentRunError::ConfigError(format!(
                "{} is not set. Please ensure it is defined in your .env file.",
                API_KEY_VAR
            ))
        })?;

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self::new(api_key, base_url.trim_end_matches('/'), model))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Settings that apply to a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Overrides the model of every agent in the run.
    pub model: Option<String>,
    pub workflow_name: String,
    pub max_turns: usize,
    /// Suppresses the runner's own `tracing` span for the run.
    pub tracing_disabled: bool,
    pub completion: CompletionConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: None,
            workflow_name: "Agent workflow".to_string(),
            max_turns: 10,
            tracing_disabled: false,
            completion: CompletionConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn with_workflow_name(mut self, name: impl Into<String>) -> Self {
        self.workflow_name = name.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_tracing_disabled(mut self, disabled: bool) -> Self {
        self.tracing_disabled = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = ModelConfig::from_vars(lookup_from(&[]));
        match result {
            Err(AgentRunError::ConfigError(msg)) => assert!(msg.contains("GEMINI_API_KEY")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_api_key_is_config_error() {
        let result = ModelConfig::from_vars(lookup_from(&[("GEMINI_API_KEY", "  ")]));
        assert!(matches!(result, Err(AgentRunError::ConfigError(_))));
    }

    #[test]
    fn test_defaults_point_at_gemini() {
        let config = ModelConfig::from_vars(lookup_from(&[("GEMINI_API_KEY", "key")])).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_overrides_from_vars() {
        let config = ModelConfig::from_vars(lookup_from(&[
            ("GEMINI_API_KEY", "key"),
            ("AGENTRUN_BASE_URL", "http://localhost:8080/v1/"),
            ("AGENTRUN_MODEL", "local-model"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "local-model");
    }

    #[test]
    fn test_run_config_default() {
        let config = RunConfig::default();
        assert_eq!(config.workflow_name, "Agent workflow");
        assert_eq!(config.max_turns, 10);
        assert!(config.model.is_none());
        assert!(!config.tracing_disabled);
    }

    #[test]
    fn test_run_config_builders() {
        let config = RunConfig::default()
            .with_workflow_name("terminal_translate")
            .with_model("gemini-2.0-flash")
            .with_max_turns(3)
            .with_tracing_disabled(true);

        assert_eq!(config.workflow_name, "terminal_translate");
        assert_eq!(config.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.max_turns, 3);
        assert!(config.tracing_disabled);
    }
}
