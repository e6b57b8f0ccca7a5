use crate::error::{AgentRunError, Result};
use crate::hooks::AgentOutput;
use crate::llm::tools::{LlmTool, ToolDescriptor};
use schemars::JsonSchema;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

/// A named agent: instructions for the model plus the tools and handoff targets it may use.
///
/// Agents are immutable once built and are shared between runs as `Arc<Agent>`.
#[derive(Clone)]
pub struct Agent {
    name: String,
    instructions: String,
    handoff_description: Option<String>,
    model: Option<String>,
    tools: Vec<Arc<dyn LlmTool>>,
    handoffs: Vec<Handoff>,
    output_schema: Option<Value>,
}

impl Agent {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            handoff_description: None,
            model: None,
            tools: Vec::new(),
            handoffs: Vec::new(),
            output_schema: None,
        }
    }

    pub fn with_tool(mut self, tool: impl LlmTool + 'static) -> Self {
        self.tools.push(Arc::new(tool));
        self
    }

    pub fn with_tools(mut self, tools: Vec<Arc<dyn LlmTool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn with_handoff(mut self, agent: Arc<Agent>) -> Self {
        self.handoffs.push(Handoff::new(agent));
        self
    }

    /// Description shown to other agents that can hand off to this one.
    pub fn with_handoff_description(mut self, description: impl Into<String>) -> Self {
        self.handoff_description = Some(description.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Ask the model for JSON matching `T`'s schema as the final output.
    pub fn with_output_type<T: JsonSchema>(mut self) -> Self {
        self.output_schema = serde_json::to_value(schemars::schema_for!(T)).ok();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn handoff_description(&self) -> Option<&str> {
        self.handoff_description.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn tools(&self) -> &[Arc<dyn LlmTool>] {
        &self.tools
    }

    pub fn handoffs(&self) -> &[Handoff] {
        &self.handoffs
    }

    pub fn output_schema(&self) -> Option<&Value> {
        self.output_schema.as_ref()
    }

    pub fn find_tool(&self, name: &str) -> Option<&Arc<dyn LlmTool>> {
        self.tools.iter().find(|t| t.matches(name))
    }

    pub fn find_handoff(&self, tool_name: &str) -> Option<&Handoff> {
        self.handoffs.iter().find(|h| h.tool_name == tool_name)
    }

    /// Everything the model may call on this agent's turn: its tools, then its handoffs.
    pub fn tool_descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| t.descriptor())
            .chain(self.handoffs.iter().map(Handoff::descriptor))
            .collect()
    }

    /// Interpret the model's final text according to this agent's output type.
    pub fn parse_output(&self, text: String) -> Result<AgentOutput> {
        if self.output_schema.is_none() {
            return Ok(AgentOutput::Text(text));
        }

        serde_json::from_str(&text).map(AgentOutput::Structured).map_err(|e| {
            AgentRunError::AgentError(format!(
                "Agent {} returned invalid structured output: {}",
                self.name, e
            ))
        })
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .field("handoffs", &self.handoffs)
            .finish()
    }
}

/// A handoff target, offered to the model as a `transfer_to_<agent>` function.
#[derive(Clone)]
pub struct Handoff {
    pub tool_name: String,
    pub description: String,
    pub agent: Arc<Agent>,
}

impl Handoff {
    pub fn new(agent: Arc<Agent>) -> Self {
        let mut description = format!("Handoff to the {} agent to handle the request.", agent.name());
        if let Some(extra) = agent.handoff_description() {
            description.push(' ');
            description.push_str(extra);
        }

        Self {
            tool_name: handoff_tool_name(agent.name()),
            description,
            agent,
        }
    }

    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            self.tool_name.clone(),
            self.description.clone(),
            json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        )
    }
}

impl fmt::Debug for Handoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handoff")
            .field("tool_name", &self.tool_name)
            .field("agent", &self.agent.name())
            .finish()
    }
}

/// `"Multiply Agent"` becomes `"transfer_to_multiply_agent"`.
pub fn handoff_tool_name(agent_name: &str) -> String {
    let slug: String = agent_name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("transfer_to_{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::tools::multiply_by_two::MultiplyByTwoTool;
    use crate::llm::tools::random_number::RandomNumberTool;
    use serde::Deserialize;

    fn multiply_agent() -> Arc<Agent> {
        Arc::new(
            Agent::new(
                "Multiply Agent",
                "Multiply the number by 2 and then return the final result.",
            )
            .with_tool(MultiplyByTwoTool),
        )
    }

    #[test]
    fn test_handoff_tool_name() {
        assert_eq!(handoff_tool_name("Multiply Agent"), "transfer_to_multiply_agent");
        assert_eq!(handoff_tool_name("spanish_agent"), "transfer_to_spanish_agent");
        assert_eq!(handoff_tool_name("Agent #1"), "transfer_to_agent__1");
    }

    #[test]
    fn test_builder() {
        let agent = Agent::new("Start Agent", "Generate a random number.")
            .with_tool(RandomNumberTool)
            .with_handoff(multiply_agent())
            .with_model("gemini-2.0-flash");

        assert_eq!(agent.name(), "Start Agent");
        assert_eq!(agent.instructions(), "Generate a random number.");
        assert_eq!(agent.model(), Some("gemini-2.0-flash"));
        assert_eq!(agent.tools().len(), 1);
        assert_eq!(agent.handoffs().len(), 1);
        assert!(agent.output_schema().is_none());
    }

    #[test]
    fn test_tool_descriptors_include_handoffs() {
        let agent = Agent::new("Start Agent", "")
            .with_tool(RandomNumberTool)
            .with_handoff(multiply_agent());

        let names: Vec<String> =
            agent.tool_descriptors().into_iter().map(|d| d.function.name).collect();
        assert_eq!(names, vec!["random_number", "transfer_to_multiply_agent"]);
    }

    #[test]
    fn test_find_tool_and_handoff() {
        let agent = Agent::new("Start Agent", "")
            .with_tool(RandomNumberTool)
            .with_handoff(multiply_agent());

        assert!(agent.find_tool("random_number").is_some());
        assert!(agent.find_tool("multiply_by_two").is_none());
        let handoff = agent.find_handoff("transfer_to_multiply_agent").unwrap();
        assert_eq!(handoff.agent.name(), "Multiply Agent");
    }

    #[test]
    fn test_handoff_description() {
        let target = Arc::new(
            Agent::new("spanish_agent", "You translate the user's message to Spanish")
                .with_handoff_description("An English to Spanish translator"),
        );
        let handoff = Handoff::new(target);

        assert_eq!(
            handoff.description,
            "Handoff to the spanish_agent agent to handle the request. An English to Spanish translator"
        );
    }

    #[test]
    fn test_parse_text_output() {
        let agent = Agent::new("A", "");
        assert_eq!(
            agent.parse_output("hello".to_string()).unwrap(),
            AgentOutput::Text("hello".to_string())
        );
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct Doubled {
        number: i64,
    }

    #[test]
    fn test_parse_structured_output() {
        let agent = Agent::new("A", "").with_output_type::<Doubled>();
        assert!(agent.output_schema().is_some());

        let output = agent.parse_output(r#"{"number": 8}"#.to_string()).unwrap();
        assert_eq!(output, AgentOutput::Structured(json!({"number": 8})));
    }

    #[test]
    fn test_parse_invalid_structured_output() {
        let agent = Agent::new("A", "").with_output_type::<Doubled>();
        assert!(matches!(
            agent.parse_output("eight".to_string()),
            Err(AgentRunError::AgentError(_))
        ));
    }
}
