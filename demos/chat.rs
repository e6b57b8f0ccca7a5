//! Interactive Chat Example
//!
//! A terminal chat with a cargo tracking assistant. Each message starts a fresh run;
//! lifecycle events are logged through `tracing` (set RUST_LOG=info to see them).
//!
//! Type 'exit' or 'quit' to leave.
//!
//! Run with: cargo run --example chat

use agentrun::prelude::*;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> agentrun::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let model_config = ModelConfig::from_env()?;
    let runner = Runner::from_config(&model_config)?;
    let config = RunConfig::default().with_workflow_name("tracking_chat");

    let tracking_agent = Arc::new(Agent::new(
        "Tracking Agent",
        "You are a helpful Tracking assistant. You can track ship cargo, \
         track shipments, and provide updates on delivery status.",
    ));

    println!("Tracking Cargo Agent");
    println!("Welcome! I can help you track your cargo shipments and provide updates on their status.");
    println!("Just type your container number! (type 'exit' to quit)\n");

    let mut hooks = TracingHooks::new();
    let stdin = io::stdin();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "exit" || query == "quit" {
            break;
        }

        println!("Generating your response...");
        match runner.run(tracking_agent.clone(), query, &mut hooks, &config).await {
            Ok(result) => println!("{}: {}\n", result.last_agent.name(), result.final_output),
            Err(e) => println!("An error occurred: {}\n", e),
        }
    }

    Ok(())
}
