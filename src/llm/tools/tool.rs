use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Descriptor for tool function parameters
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDescriptor {
    pub r#type: String,
    pub function: FunctionDescriptor,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Build a `"function"` descriptor.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            r#type: "function".to_string(),
            function: FunctionDescriptor {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Trait for LLM tools
#[async_trait]
pub trait LlmTool: Send + Sync {
    /// Execute the tool with given arguments
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value>;

    /// Get tool descriptor for LLM
    fn descriptor(&self) -> ToolDescriptor;

    /// Display name of the tool, as the model sees it
    fn name(&self) -> String {
        self.descriptor().function.name
    }

    /// Check if this tool matches the given name
    fn matches(&self, name: &str) -> bool {
        self.descriptor().function.name == name
    }
}

/// Render a tool result as the text handed back to the model and to hooks.
///
/// JSON strings are passed through verbatim; anything else becomes compact JSON.
pub fn stringify_tool_output(output: &Value) -> String {
    match output {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Fetch a required integer argument.
pub(crate) fn required_i64(args: &HashMap<String, Value>, name: &str) -> Result<i64> {
    args.get(name).and_then(|v| v.as_i64()).ok_or_else(|| {
        crate::error::AgentRunError::ToolError(format!(
            "Missing or non-integer argument: {}",
            name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_descriptor_serialization() {
        let descriptor =
            ToolDescriptor::function("test_tool", "A test tool", json!({"type": "object"}));

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "test_tool");
        assert_eq!(json["function"]["description"], "A test tool");
    }

    struct MockTool;

    #[async_trait]
    impl LlmTool for MockTool {
        async fn run(&self, _args: &HashMap<String, Value>) -> Result<Value> {
            Ok(json!("result"))
        }

        fn descriptor(&self) -> ToolDescriptor {
            ToolDescriptor::function("mock_tool", "A mock tool", json!({}))
        }
    }

    #[test]
    fn test_tool_matches() {
        let tool = MockTool;
        assert!(tool.matches("mock_tool"));
        assert!(!tool.matches("other_tool"));
        assert_eq!(tool.name(), "mock_tool");
    }

    #[tokio::test]
    async fn test_tool_run() {
        let result = MockTool.run(&HashMap::new()).await.unwrap();
        assert_eq!(result, json!("result"));
    }

    #[test]
    fn test_stringify_tool_output() {
        assert_eq!(stringify_tool_output(&json!("5")), "5");
        assert_eq!(stringify_tool_output(&json!(5)), "5");
        assert_eq!(stringify_tool_output(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(stringify_tool_output(&json!("")), "");
    }

    #[test]
    fn test_required_i64() {
        let args = HashMap::from([("x".to_string(), json!(4)), ("s".to_string(), json!("4"))]);
        assert_eq!(required_i64(&args, "x").unwrap(), 4);
        assert!(required_i64(&args, "s").is_err());
        assert!(required_i64(&args, "missing").is_err());
    }
}
