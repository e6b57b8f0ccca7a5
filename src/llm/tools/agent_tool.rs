use crate::agents::Agent;
use crate::config::RunConfig;
use crate::error::{AgentRunError, Result};
use crate::hooks::NoopHooks;
use crate::llm::tools::{LlmTool, ToolDescriptor};
use crate::runner::Runner;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Wraps an agent as an LlmTool
///
/// This allows agents to be used as tools by other agents (delegation pattern).
/// Unlike a handoff, control returns to the calling agent once the wrapped agent
/// has produced its output. The tool's descriptor has a single "input" parameter.
pub struct AgentTool {
    runner: Runner,
    agent: Arc<Agent>,
    name: String,
    description: String,
    config: RunConfig,
}

impl AgentTool {
    /// # Arguments
    /// * `runner` - Runner used for the nested run
    /// * `agent` - The agent to run when the tool is called
    /// * `name` - The name of this tool (how other agents will call it)
    /// * `description` - Description of what this agent/tool does
    pub fn new(
        runner: Runner,
        agent: Arc<Agent>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let config = RunConfig::default().with_workflow_name(name.clone());
        Self {
            runner,
            agent,
            name,
            description: description.into(),
            config,
        }
    }

    pub fn with_run_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl LlmTool for AgentTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let input = args
            .get("input")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentRunError::ToolError("Missing 'input' parameter".to_string()))?;

        info!(tool = %self.name, agent = self.agent.name(), "Delegating to agent");

        let mut hooks = NoopHooks;
        let result = self
            .runner
            .run(self.agent.clone(), input, &mut hooks, &self.config)
            .await?;

        Ok(json!(result.final_output.to_string()))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            self.name.clone(),
            self.description.clone(),
            json!({
                "type": "object",
                "properties": {
                    "input": {
                        "type": "string",
                        "description": "Instructions for this agent."
                    }
                },
                "required": ["input"],
                "additionalProperties": false
            }),
        )
    }
}
