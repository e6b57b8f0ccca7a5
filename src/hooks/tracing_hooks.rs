use super::{AgentOutput, RunHooks};
use crate::agents::Agent;
use crate::context::RunContext;
use crate::error::Result;
use crate::llm::tools::LlmTool;
use crate::usage::usage_to_string;
use tracing::info;

/// Emits each lifecycle event as a structured `tracing` record at info level.
#[derive(Debug, Default)]
pub struct TracingHooks {
    event_counter: u64,
}

impl TracingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_count(&self) -> u64 {
        self.event_counter
    }

    fn next(&mut self) -> u64 {
        self.event_counter += 1;
        self.event_counter
    }
}

impl RunHooks for TracingHooks {
    fn on_agent_start(&mut self, context: &RunContext, agent: &Agent) -> Result<()> {
        let seq = self.next();
        info!(
            seq,
            run_id = %context.run_id(),
            agent = agent.name(),
            usage = %usage_to_string(context.usage()),
            "agent started"
        );
        Ok(())
    }

    fn on_agent_end(
        &mut self,
        context: &RunContext,
        agent: &Agent,
        output: &AgentOutput,
    ) -> Result<()> {
        let seq = self.next();
        info!(
            seq,
            run_id = %context.run_id(),
            agent = agent.name(),
            output = %output,
            usage = %usage_to_string(context.usage()),
            "agent ended"
        );
        Ok(())
    }

    fn on_tool_start(
        &mut self,
        context: &RunContext,
        agent: &Agent,
        tool: &dyn LlmTool,
    ) -> Result<()> {
        let seq = self.next();
        info!(
            seq,
            run_id = %context.run_id(),
            agent = agent.name(),
            tool = %tool.name(),
            usage = %usage_to_string(context.usage()),
            "tool started"
        );
        Ok(())
    }

    fn on_tool_end(
        &mut self,
        context: &RunContext,
        agent: &Agent,
        tool: &dyn LlmTool,
        result: &str,
    ) -> Result<()> {
        let seq = self.next();
        info!(
            seq,
            run_id = %context.run_id(),
            agent = agent.name(),
            tool = %tool.name(),
            result,
            usage = %usage_to_string(context.usage()),
            "tool ended"
        );
        Ok(())
    }

    fn on_handoff(
        &mut self,
        context: &RunContext,
        from_agent: &Agent,
        to_agent: &Agent,
    ) -> Result<()> {
        let seq = self.next();
        info!(
            seq,
            run_id = %context.run_id(),
            from = from_agent.name(),
            to = to_agent.name(),
            usage = %usage_to_string(context.usage()),
            "handoff"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_event() {
        let ctx = RunContext::new("test");
        let agent = Agent::new("A", "");
        let mut hooks = TracingHooks::new();

        hooks.on_agent_start(&ctx, &agent).unwrap();
        hooks.on_handoff(&ctx, &agent, &agent).unwrap();
        hooks
            .on_agent_end(&ctx, &agent, &AgentOutput::Text("done".to_string()))
            .unwrap();

        assert_eq!(hooks.event_count(), 3);
    }
}
