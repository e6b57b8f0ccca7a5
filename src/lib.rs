pub mod agents;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod llm;
pub mod runner;
pub mod usage;

pub use error::{AgentRunError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::agents::Agent;
    pub use crate::config::{ModelConfig, RunConfig};
    pub use crate::context::RunContext;
    pub use crate::error::{AgentRunError, Result};
    pub use crate::hooks::{AgentOutput, NoopHooks, PrintingHooks, RunHooks, TracingHooks};
    pub use crate::llm::gateways::OpenAIGateway;
    pub use crate::llm::tools::{FunctionDescriptor, LlmTool, ToolDescriptor};
    pub use crate::llm::{CompletionConfig, LlmGateway, LlmMessage, MessageRole};
    pub use crate::runner::{RunResult, Runner};
    pub use crate::usage::{usage_to_string, Usage};
}
