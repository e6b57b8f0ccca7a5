//! Lifecycle Hooks Example
//!
//! A start agent draws a random number and hands odd numbers to a multiply agent.
//! Every lifecycle event is printed as a numbered line with the usage so far:
//!
//! ```text
//! ### 1: Agent Start Agent started. Usage: 0 requests, 0 input tokens, 0 output tokens, 0 total tokens
//! ### 2: Tool random_number started. Usage: 1 requests, ...
//! ```
//!
//! Run with: cargo run --example hooks

use agentrun::llm::tools::{MultiplyByTwoTool, RandomNumberTool};
use agentrun::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> agentrun::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let model_config = ModelConfig::from_env()?;
    let runner = Runner::from_config(&model_config)?;
    let config = RunConfig::default()
        .with_model(model_config.model.clone())
        .with_tracing_disabled(true);

    let multiply_agent = Arc::new(
        Agent::new(
            "Multiply Agent",
            "Multiply the number by 2 and then return the final result.",
        )
        .with_tool(MultiplyByTwoTool),
    );

    let start_agent = Arc::new(
        Agent::new(
            "Start Agent",
            "Generate a random number. If it's even, stop. If it's odd, hand off to the multipler agent.",
        )
        .with_tool(RandomNumberTool)
        .with_handoff(multiply_agent),
    );

    print!("Enter a max number: ");
    io::stdout().flush()?;
    let mut user_input = String::new();
    io::stdin().read_line(&mut user_input)?;

    let mut hooks = PrintingHooks::stdout();
    let result = runner
        .run(
            start_agent,
            format!("Generate a random number between 0 and {}.", user_input.trim()),
            &mut hooks,
            &config,
        )
        .await?;

    println!("{}", result.final_output);
    println!("Done!");
    Ok(())
}
