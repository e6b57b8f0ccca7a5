//! Gateway for OpenAI-compatible chat-completions endpoints.
//!
//! Works against OpenAI itself and against providers exposing the same API shape,
//! such as Gemini's OpenAI compatibility layer.

use crate::config::ModelConfig;
use crate::error::{AgentRunError, Result};
use crate::llm::gateway::{CompletionConfig, LlmGateway};
use crate::llm::gateways::openai_messages_adapter::{
    adapt_messages_to_openai, convert_tool_calls, convert_usage,
};
use crate::llm::models::{LlmGatewayResponse, LlmMessage};
use crate::llm::tools::ToolDescriptor;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info};

/// Gateway for an OpenAI-compatible LLM service.
pub struct OpenAIGateway {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIGateway {
    /// Create a gateway from a model configuration.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create gateway with custom API key and base URL.
    pub fn with_api_key_and_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Self::new(&ModelConfig::new(api_key, base_url, ""))
    }

    fn request_body(&self, model: &str, messages: &[LlmMessage], config: &CompletionConfig) -> Value {
        let mut body = json!({
            "model": model,
            "messages": adapt_messages_to_openai(messages),
            "temperature": config.temperature,
            "max_tokens": config.max_tokens,
        });

        if let Some(top_p) = config.top_p {
            body["top_p"] = json!(top_p);
        }

        body
    }

    async fn post_completion(&self, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AgentRunError::GatewayError(format!(
                "Chat completions error: {} - {}",
                status, error_text
            )));
        }

        Ok(response.json().await?)
    }
}

fn parse_response(response_body: &Value) -> Result<LlmGatewayResponse> {
    let message = response_body
        .get("choices")
        .and_then(|c| c.get(0))
        .map(|c| &c["message"])
        .ok_or_else(|| AgentRunError::GatewayError("No choices in response".to_string()))?;

    let content = message["content"].as_str().map(String::from);

    let tool_calls = match message["tool_calls"].as_array() {
        Some(calls) => convert_tool_calls(calls),
        None => vec![],
    };

    Ok(LlmGatewayResponse {
        content,
        tool_calls,
        usage: convert_usage(&response_body["usage"]),
    })
}

#[async_trait]
impl LlmGateway for OpenAIGateway {
    async fn complete(
        &self,
        model: &str,
        messages: &[LlmMessage],
        tools: &[ToolDescriptor],
        config: &CompletionConfig,
    ) -> Result<LlmGatewayResponse> {
        info!("Delegating to chat completions endpoint");
        debug!(model = model, messages = messages.len(), tools = tools.len(), "Completion request");

        let mut body = self.request_body(model, messages, config);

        if !tools.is_empty() {
            body["tools"] = serde_json::to_value(tools)?;
        }

        let response_body = self.post_completion(&body).await?;
        parse_response(&response_body)
    }

    async fn complete_json(
        &self,
        model: &str,
        messages: &[LlmMessage],
        schema: Value,
        config: &CompletionConfig,
    ) -> Result<LlmGatewayResponse> {
        info!("Requesting structured output");

        let mut body = self.request_body(model, messages, config);
        body["response_format"] = json!({
            "type": "json_schema",
            "json_schema": {
                "name": "response",
                "schema": schema
            }
        });

        let response_body = self.post_completion(&body).await?;
        let response = parse_response(&response_body)?;

        if response.content.is_none() {
            return Err(AgentRunError::GatewayError("No content in response".to_string()));
        }

        Ok(response)
    }

    async fn get_available_models(&self) -> Result<Vec<String>> {
        debug!("Fetching available models");

        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AgentRunError::GatewayError(format!(
                "Failed to get models: {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;

        let mut models = body["data"]
            .as_array()
            .ok_or_else(|| AgentRunError::GatewayError("Invalid response format".to_string()))?
            .iter()
            .filter_map(|m| m["id"].as_str().map(String::from))
            .collect::<Vec<_>>();

        models.sort();
        Ok(models)
    }
}
