//! Agents as Tools Example
//!
//! Three translator agents are wrapped as tools for an orchestrator. Unlike a handoff,
//! the orchestrator keeps control and composes the translations itself.
//!
//! Pick a single translator at the prompt, or press Enter to use the orchestrator.
//!
//! Run with: cargo run --example agent_tools

use agentrun::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn translator(language: &str) -> Arc<Agent> {
    Arc::new(
        Agent::new(
            format!("{}_agent", language.to_lowercase()),
            format!("You translate the user's message to {}", language),
        )
        .with_handoff_description(format!("An English to {} translator", language)),
    )
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> agentrun::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let model_config = ModelConfig::from_env()?;
    let runner = Runner::from_config(&model_config)?;

    let spanish_agent = translator("Spanish");
    let french_agent = translator("French");
    let italian_agent = translator("Italian");

    let orchestrator_agent = Arc::new(
        Agent::new(
            "orchestrator_agent",
            "You are a translation agent. You use the tools given to you to translate. \
             If asked for multiple translations, you call the relevant tools in order. \
             You never translate on your own, you always use the provided tools.",
        )
        .with_tool(runner.agent_as_tool(
            spanish_agent.clone(),
            "translate_to_spanish",
            "Translate the user's message to Spanish",
        ))
        .with_tool(runner.agent_as_tool(
            french_agent.clone(),
            "translate_to_french",
            "Translate the user's message to French",
        ))
        .with_tool(runner.agent_as_tool(
            italian_agent.clone(),
            "translate_to_italian",
            "Translate the user's message to Italian",
        )),
    );

    println!("Welcome to Translate Agent Tools");
    println!("Type one of: spanish / french / italian");
    println!("Or press Enter to use orchestrator (multi-language).");
    let choice = prompt("\nWhich agent do you want? ")?.to_lowercase();
    let message = prompt("Enter the text you want translated: ")?;

    let agent = match choice.as_str() {
        "spanish" => spanish_agent,
        "french" => french_agent,
        "italian" => italian_agent,
        _ => orchestrator_agent,
    };

    let config = RunConfig::default().with_workflow_name("terminal_translate");
    let result = runner.run(agent.clone(), message, &mut NoopHooks, &config).await?;

    println!("\n\nFinal response from {}:\n{}", agent.name(), result.final_output);
    Ok(())
}
