//! Agent definitions.
//!
//! An [`Agent`] is plain data: a name, instructions, and the tools and handoff targets
//! the model may call while the agent is active. Running an agent is the job of
//! [`crate::runner::Runner`].

pub mod agent;

pub use agent::{handoff_tool_name, Agent, Handoff};
