//! Cumulative request and token accounting for a run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the requests and tokens consumed by a run so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub requests: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl Usage {
    /// Usage for a single model request.
    pub fn for_request(input_tokens: u64, output_tokens: u64, total_tokens: u64) -> Self {
        Self {
            requests: 1,
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }

    /// Fold another usage record into this one.
    pub fn add(&mut self, other: &Usage) {
        self.requests += other.requests;
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// Render a usage snapshot as a single human-readable clause.
pub fn usage_to_string(usage: &Usage) -> String {
    format!(
        "{} requests, {} input tokens, {} output tokens, {} total tokens",
        usage.requests, usage.input_tokens, usage.output_tokens, usage.total_tokens
    )
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&usage_to_string(self))
    }
}
