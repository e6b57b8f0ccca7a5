pub mod agent_tool;
pub mod multiply_by_two;
pub mod random_number;
mod tool;
pub mod weather_tool;

pub use agent_tool::AgentTool;
pub use multiply_by_two::MultiplyByTwoTool;
pub use random_number::RandomNumberTool;
pub use tool::{stringify_tool_output, FunctionDescriptor, LlmTool, ToolDescriptor};
pub use weather_tool::WeatherTool;
