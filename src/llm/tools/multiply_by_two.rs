use crate::error::{AgentRunError, Result};
use crate::llm::tools::tool::required_i64;
use crate::llm::tools::{LlmTool, ToolDescriptor};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Doubles an integer.
pub struct MultiplyByTwoTool;

#[async_trait]
impl LlmTool for MultiplyByTwoTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let x = required_i64(args, "x")?;
        let doubled = x
            .checked_mul(2)
            .ok_or_else(|| AgentRunError::ToolError(format!("{} * 2 overflows", x)))?;
        Ok(json!(doubled))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "multiply_by_two",
            "Return x times two.",
            json!({
                "type": "object",
                "properties": {
                    "x": {"type": "integer"}
                },
                "required": ["x"]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_doubles() {
        let args = HashMap::from([("x".to_string(), json!(21))]);
        assert_eq!(MultiplyByTwoTool.run(&args).await.unwrap(), json!(42));
    }

    #[tokio::test]
    async fn test_negative() {
        let args = HashMap::from([("x".to_string(), json!(-3))]);
        assert_eq!(MultiplyByTwoTool.run(&args).await.unwrap(), json!(-6));
    }

    #[tokio::test]
    async fn test_overflow_is_error() {
        let args = HashMap::from([("x".to_string(), json!(i64::MAX))]);
        assert!(MultiplyByTwoTool.run(&args).await.is_err());
    }
}
