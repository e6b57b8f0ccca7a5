//! Tools Agent Example
//!
//! A weather assistant that looks up current conditions through the get_weather tool.
//!
//! Requires GEMINI_API_KEY and WEATHER_API_KEY (weatherapi.com) in the environment
//! or a .env file.
//!
//! Run with: cargo run --example tools_agent

use agentrun::llm::tools::WeatherTool;
use agentrun::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> agentrun::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let model_config = ModelConfig::from_env()?;
    let runner = Runner::from_config(&model_config)?;
    let config = RunConfig::default().with_tracing_disabled(true);

    let agent = Arc::new(
        Agent::new(
            "Assistant",
            "You are weather assistant. You can use the get_weather tool to get the current weather for a given city.",
        )
        .with_tool(WeatherTool::from_env()?),
    );

    let result = runner
        .run(agent, "what is the weather in Karachi", &mut NoopHooks, &config)
        .await?;

    println!("{}", result.final_output);
    Ok(())
}
