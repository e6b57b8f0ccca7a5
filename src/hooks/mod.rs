//! Lifecycle hooks for agent runs.
//!
//! The runner calls a [`RunHooks`] implementation at each point of interest in a run:
//! when an agent starts or finishes, around every tool invocation, and on every handoff.
//! Each callback runs to completion before the runner resumes, in the order the events
//! occur.
//!
//! # Implementations
//!
//! - [`NoopHooks`] - ignores every event
//! - [`PrintingHooks`] - writes one numbered trace line per event
//! - [`TracingHooks`] - emits one numbered `tracing` record per event
//!
//! Hooks take `&mut self`, so a single instance can only be driven by one run at a time.
//! Concurrent runs each need their own instance.

pub mod printing_hooks;
pub mod tracing_hooks;

pub use printing_hooks::PrintingHooks;
pub use tracing_hooks::TracingHooks;

use crate::agents::Agent;
use crate::context::RunContext;
use crate::error::Result;
use crate::llm::tools::LlmTool;
use serde_json::Value;
use std::fmt;

/// Final output of an agent.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutput {
    Text(String),
    Structured(Value),
}

impl AgentOutput {
    /// The text of a `Text` output.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AgentOutput::Text(text) => Some(text),
            AgentOutput::Structured(_) => None,
        }
    }
}

/// `Text` renders verbatim, `Structured` as compact JSON.
impl fmt::Display for AgentOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentOutput::Text(text) => f.write_str(text),
            AgentOutput::Structured(value) => write!(f, "{}", value),
        }
    }
}

/// Callbacks invoked by the runner during a run.
///
/// All methods default to doing nothing. An error returned from a callback aborts the run
/// and is returned to the caller of the runner.
pub trait RunHooks: Send {
    /// Called before an agent takes its first turn, including after a handoff to it.
    fn on_agent_start(&mut self, _context: &RunContext, _agent: &Agent) -> Result<()> {
        Ok(())
    }

    /// Called once when the final agent of a run produces its output.
    fn on_agent_end(
        &mut self,
        _context: &RunContext,
        _agent: &Agent,
        _output: &AgentOutput,
    ) -> Result<()> {
        Ok(())
    }

    fn on_tool_start(
        &mut self,
        _context: &RunContext,
        _agent: &Agent,
        _tool: &dyn LlmTool,
    ) -> Result<()> {
        Ok(())
    }

    fn on_tool_end(
        &mut self,
        _context: &RunContext,
        _agent: &Agent,
        _tool: &dyn LlmTool,
        _result: &str,
    ) -> Result<()> {
        Ok(())
    }

    fn on_handoff(
        &mut self,
        _context: &RunContext,
        _from_agent: &Agent,
        _to_agent: &Agent,
    ) -> Result<()> {
        Ok(())
    }
}

/// Hooks that ignore every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl RunHooks for NoopHooks {}
