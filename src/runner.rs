//! Drives an agent run against an LLM gateway.
//!
//! A run alternates between asking the model for the current agent's next step and
//! acting on it. Tool calls are executed and their results fed back; a call to a
//! `transfer_to_*` function hands the conversation to another agent; a plain answer
//! ends the run. Hooks are notified synchronously at every step.

use crate::agents::Agent;
use crate::config::{ModelConfig, RunConfig};
use crate::context::RunContext;
use crate::error::{AgentRunError, Result};
use crate::hooks::{AgentOutput, RunHooks};
use crate::llm::gateways::OpenAIGateway;
use crate::llm::tools::{stringify_tool_output, AgentTool, LlmTool};
use crate::llm::{LlmGateway, LlmGatewayResponse, LlmMessage, LlmToolCall};
use crate::usage::Usage;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub final_output: AgentOutput,
    /// The agent that produced the final output, after any handoffs.
    pub last_agent: Arc<Agent>,
    pub usage: Usage,
    pub turns: usize,
    pub run_id: Uuid,
}

/// Runs agents against a gateway.
///
/// Cheap to clone; clones share the gateway.
#[derive(Clone)]
pub struct Runner {
    gateway: Arc<dyn LlmGateway>,
    default_model: String,
}

impl Runner {
    /// # Arguments
    /// * `gateway` - Where model calls go
    /// * `default_model` - Model for agents that don't name one
    pub fn new(gateway: Arc<dyn LlmGateway>, default_model: impl Into<String>) -> Self {
        Self {
            gateway,
            default_model: default_model.into(),
        }
    }

    /// Runner backed by an OpenAI-compatible endpoint described by `config`.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let gateway = OpenAIGateway::new(config)?;
        Ok(Self::new(Arc::new(gateway), config.model.clone()))
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Expose `agent` as a tool other agents can call.
    pub fn agent_as_tool(
        &self,
        agent: Arc<Agent>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> AgentTool {
        AgentTool::new(self.clone(), agent, name, description)
    }

    /// Run `agent` on `input` until it produces a final output.
    pub async fn run(
        &self,
        agent: Arc<Agent>,
        input: impl Into<String>,
        hooks: &mut dyn RunHooks,
        config: &RunConfig,
    ) -> Result<RunResult> {
        let context = RunContext::new(config.workflow_name.clone());
        let span = if config.tracing_disabled {
            Span::none()
        } else {
            info_span!(
                "agent_run",
                run_id = %context.run_id(),
                workflow = %config.workflow_name,
                agent = agent.name()
            )
        };

        self.run_loop(context, agent, input.into(), hooks, config)
            .instrument(span)
            .await
    }

    /// Blocking variant of [`Runner::run`] for callers without an async runtime.
    ///
    /// Must not be called from within a tokio runtime.
    pub fn run_sync(
        &self,
        agent: Arc<Agent>,
        input: impl Into<String>,
        hooks: &mut dyn RunHooks,
        config: &RunConfig,
    ) -> Result<RunResult> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(self.run(agent, input, hooks, config))
    }

    async fn run_loop(
        &self,
        mut context: RunContext,
        agent: Arc<Agent>,
        input: String,
        hooks: &mut dyn RunHooks,
        config: &RunConfig,
    ) -> Result<RunResult> {
        let mut current = agent;
        let mut history = vec![LlmMessage::user(input)];
        let mut needs_start = true;

        for turn in 1..=config.max_turns {
            if needs_start {
                info!(agent = current.name(), "Agent started");
                hooks.on_agent_start(&context, &current)?;
                needs_start = false;
            }

            let response = self.call_model(&current, &history, config).await?;
            context.record_usage(&response.usage);

            if response.tool_calls.is_empty() {
                let output = current.parse_output(response.content.unwrap_or_default())?;
                hooks.on_agent_end(&context, &current, &output)?;
                info!(agent = current.name(), turns = turn, "Run finished");

                return Ok(RunResult {
                    final_output: output,
                    last_agent: current,
                    usage: *context.usage(),
                    turns: turn,
                    run_id: context.run_id(),
                });
            }

            history.push(LlmMessage::assistant_tool_calls(
                response.content.clone(),
                response.tool_calls.clone(),
            ));

            let next =
                self.handle_tool_calls(&context, &current, &response.tool_calls, &mut history, hooks)
                    .await?;

            if let Some(next) = next {
                current = next;
                needs_start = true;
            }
        }

        Err(AgentRunError::MaxTurnsExceeded(config.max_turns))
    }

    async fn call_model(
        &self,
        agent: &Agent,
        history: &[LlmMessage],
        config: &RunConfig,
    ) -> Result<LlmGatewayResponse> {
        let model = config
            .model
            .as_deref()
            .or(agent.model())
            .unwrap_or(&self.default_model);

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(LlmMessage::system(agent.instructions()));
        messages.extend_from_slice(history);

        let tools = agent.tool_descriptors();
        debug!(agent = agent.name(), model = model, tools = tools.len(), "Calling model");

        match agent.output_schema() {
            Some(schema) if tools.is_empty() => {
                self.gateway
                    .complete_json(model, &messages, schema.clone(), &config.completion)
                    .await
            }
            _ => self.gateway.complete(model, &messages, &tools, &config.completion).await,
        }
    }

    /// Execute one batch of tool calls in order, returning the handoff target if any.
    async fn handle_tool_calls(
        &self,
        context: &RunContext,
        agent: &Arc<Agent>,
        tool_calls: &[LlmToolCall],
        history: &mut Vec<LlmMessage>,
        hooks: &mut dyn RunHooks,
    ) -> Result<Option<Arc<Agent>>> {
        let mut handoff_target: Option<Arc<Agent>> = None;

        for call in tool_calls {
            if let Some(handoff) = agent.find_handoff(&call.name) {
                if handoff_target.is_some() {
                    warn!(tool = %call.name, "Ignoring additional handoff in the same turn");
                    history.push(LlmMessage::tool(
                        call.id.clone(),
                        "Multiple handoffs detected, ignoring this one.",
                    ));
                    continue;
                }

                info!(from = agent.name(), to = handoff.agent.name(), "Handoff");
                hooks.on_handoff(context, agent, &handoff.agent)?;
                history.push(LlmMessage::tool(
                    call.id.clone(),
                    json!({"assistant": handoff.agent.name()}).to_string(),
                ));
                handoff_target = Some(handoff.agent.clone());
            } else if let Some(tool) = agent.find_tool(&call.name) {
                info!(tool = %call.name, "Executing tool");
                hooks.on_tool_start(context, agent, tool.as_ref())?;

                let result = match tool.run(&call.arguments).await {
                    Ok(output) => stringify_tool_output(&output),
                    Err(e) => {
                        warn!(tool = %call.name, error = %e, "Tool execution failed");
                        format!(
                            "An error occurred while running the tool. Please try again. Error: {}",
                            e
                        )
                    }
                };

                hooks.on_tool_end(context, agent, tool.as_ref(), &result)?;
                history.push(LlmMessage::tool(call.id.clone(), result));
            } else {
                warn!(tool = %call.name, agent = agent.name(), "Tool not found");
                history.push(LlmMessage::tool(
                    call.id.clone(),
                    format!("Tool {} not found", call.name),
                ));
            }
        }

        Ok(handoff_target)
    }
}
