//! Per-run execution context handed to lifecycle hooks.

use crate::usage::Usage;
use uuid::Uuid;

/// State owned by the runner for the duration of one run.
///
/// Hooks receive it by shared reference and can only read it.
#[derive(Debug, Clone)]
pub struct RunContext {
    run_id: Uuid,
    workflow_name: String,
    usage: Usage,
}

impl RunContext {
    pub fn new(workflow_name: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            workflow_name: workflow_name.into(),
            usage: Usage::default(),
        }
    }

    /// Cumulative usage of the run so far.
    pub fn usage(&self) -> &Usage {
        &self.usage
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub(crate) fn record_usage(&mut self, usage: &Usage) {
        self.usage.add(usage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_has_zero_usage() {
        let ctx = RunContext::new("test workflow");
        assert_eq!(*ctx.usage(), Usage::default());
        assert_eq!(ctx.workflow_name(), "test workflow");
    }

    #[test]
    fn test_record_usage_accumulates() {
        let mut ctx = RunContext::new("wf");
        ctx.record_usage(&Usage::for_request(10, 2, 12));
        ctx.record_usage(&Usage::for_request(1, 1, 2));

        assert_eq!(ctx.usage().requests, 2);
        assert_eq!(ctx.usage().total_tokens, 14);
    }

    #[test]
    fn test_run_ids_are_distinct() {
        let a = RunContext::new("wf");
        let b = RunContext::new("wf");
        assert_ne!(a.run_id(), b.run_id());
    }
}
