//! Simple Agent Example
//!
//! A single agent with no tools answering one question, run without an async runtime.
//!
//! Requires GEMINI_API_KEY in the environment or a .env file.
//!
//! Run with: cargo run --example simple_agent

use agentrun::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> agentrun::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let model_config = ModelConfig::from_env()?;
    let runner = Runner::from_config(&model_config)?;
    let config = RunConfig::default().with_tracing_disabled(true);

    let agent = Arc::new(Agent::new(
        "Simple Agent",
        "A simple agent that can answer questions.",
    ));

    let result = runner.run_sync(agent, "what is the capital of pakistan?", &mut NoopHooks, &config)?;

    println!("Result: {}", result.final_output);
    Ok(())
}
