use crate::error::{AgentRunError, Result};
use crate::llm::tools::{LlmTool, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "http://api.weatherapi.com";
const TIMEOUT_SECONDS: u64 = 10;

/// Looks up current conditions for a city through WeatherAPI.
///
/// The API key is read from `WEATHER_API_KEY` by [`WeatherTool::from_env`].
#[derive(Clone)]
pub struct WeatherTool {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherTool {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, BASE_URL)
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("WEATHER_API_KEY")
            .map_err(|_| AgentRunError::ConfigError("WEATHER_API_KEY is not set".to_string()))?;
        Self::new(api_key)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    async fn current_weather(&self, city: &str) -> Result<String> {
        let url = format!(
            "{}/v1/current.json?key={}&q={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(city)
        );
        debug!(city = city, "Fetching current weather");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AgentRunError::ToolError(format!(
                "Weather lookup for {} failed: {}",
                city,
                response.status()
            )));
        }

        let data: Value = response.json().await?;
        let temp_c = &data["current"]["temp_c"];
        let condition = data["current"]["condition"]["text"].as_str();

        match (temp_c.is_number(), condition) {
            (true, Some(condition)) => Ok(format!(
                "The current weather in {} is {}°C with {}.",
                city, temp_c, condition
            )),
            _ => Err(AgentRunError::ToolError(format!(
                "Unexpected weather response for {}",
                city
            ))),
        }
    }
}

#[async_trait]
impl LlmTool for WeatherTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let city = args
            .get("city")
            .and_then(|v| v.as_str())
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AgentRunError::ToolError("Missing required argument: city".to_string()))?;

        Ok(json!(self.current_weather(city).await?))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "get_weather",
            "Get the current weather for a given city.",
            json!({
                "type": "object",
                "properties": {
                    "city": {
                        "type": "string",
                        "description": "Name of the city"
                    }
                },
                "required": ["city"]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_formats_report() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/current.json")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("key".into(), "secret".into()),
                mockito::Matcher::UrlEncoded("q".into(), "Karachi".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"current":{"temp_c":31.5,"condition":{"text":"Sunny"}}}"#)
            .create_async()
            .await;

        let tool = WeatherTool::with_base_url("secret", server.url()).unwrap();
        let args = HashMap::from([("city".to_string(), json!("Karachi"))]);
        let result = tool.run(&args).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, json!("The current weather in Karachi is 31.5°C with Sunny."));
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let tool = WeatherTool::with_base_url("bad", server.url()).unwrap();
        let args = HashMap::from([("city".to_string(), json!("Lahore"))]);

        assert!(matches!(tool.run(&args).await, Err(AgentRunError::ToolError(_))));
    }

    #[tokio::test]
    async fn test_unexpected_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"error":{"message":"No matching location found."}}"#)
            .create_async()
            .await;

        let tool = WeatherTool::with_base_url("key", server.url()).unwrap();
        let args = HashMap::from([("city".to_string(), json!("Atlantis"))]);

        assert!(tool.run(&args).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_city() {
        let tool = WeatherTool::new("key").unwrap();
        assert!(tool.run(&HashMap::new()).await.is_err());
    }
}
