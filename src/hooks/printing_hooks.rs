use super::{AgentOutput, RunHooks};
use crate::agents::Agent;
use crate::context::RunContext;
use crate::error::Result;
use crate::llm::tools::LlmTool;
use crate::usage::usage_to_string;
use std::fmt;
use std::io::{self, Stdout, Write};

/// Writes one line per lifecycle event, numbered in the order events arrive.
///
/// ```text
/// ### 1: Agent Start Agent started. Usage: 0 requests, 0 input tokens, 0 output tokens, 0 total tokens
/// ```
///
/// The counter is bumped before the line is written, so it counts every event delivered
/// even when a write fails.
pub struct PrintingHooks<W: Write + Send = Stdout> {
    writer: W,
    event_counter: u64,
}

impl PrintingHooks<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for PrintingHooks<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> PrintingHooks<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            event_counter: 0,
        }
    }

    /// Number of events observed so far.
    pub fn event_count(&self) -> u64 {
        self.event_counter
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, context: &RunContext, message: fmt::Arguments<'_>) -> Result<()> {
        self.event_counter += 1;
        let usage = usage_to_string(context.usage());
        writeln!(self.writer, "### {}: {} Usage: {}", self.event_counter, message, usage)?;
        Ok(())
    }
}

impl<W: Write + Send> RunHooks for PrintingHooks<W> {
    fn on_agent_start(&mut self, context: &RunContext, agent: &Agent) -> Result<()> {
        self.emit(context, format_args!("Agent {} started.", agent.name()))
    }

    fn on_agent_end(
        &mut self,
        context: &RunContext,
        agent: &Agent,
        output: &AgentOutput,
    ) -> Result<()> {
        self.emit(
            context,
            format_args!("Agent {} ended with output {}.", agent.name(), output),
        )
    }

    fn on_tool_start(
        &mut self,
        context: &RunContext,
        _agent: &Agent,
        tool: &dyn LlmTool,
    ) -> Result<()> {
        self.emit(context, format_args!("Tool {} started.", tool.name()))
    }

    fn on_tool_end(
        &mut self,
        context: &RunContext,
        _agent: &Agent,
        tool: &dyn LlmTool,
        result: &str,
    ) -> Result<()> {
        self.emit(
            context,
            format_args!("Tool {} ended with result {}.", tool.name(), result),
        )
    }

    fn on_handoff(
        &mut self,
        context: &RunContext,
        from_agent: &Agent,
        to_agent: &Agent,
    ) -> Result<()> {
        self.emit(
            context,
            format_args!("Handoff from {} to {}.", from_agent.name(), to_agent.name()),
        )
    }
}
