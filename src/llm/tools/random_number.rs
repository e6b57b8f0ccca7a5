use crate::error::{AgentRunError, Result};
use crate::llm::tools::tool::required_i64;
use crate::llm::tools::{LlmTool, ToolDescriptor};
use async_trait::async_trait;
use rand::Rng;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Generates a random integer between 0 and a caller-supplied maximum, inclusive.
pub struct RandomNumberTool;

#[async_trait]
impl LlmTool for RandomNumberTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let max = required_i64(args, "max")?;
        if max < 0 {
            return Err(AgentRunError::ToolError(format!("max must be non-negative, got {}", max)));
        }

        let n = rand::thread_rng().gen_range(0..=max);
        Ok(json!(n))
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "random_number",
            "Generate a random number up to the provided max.",
            json!({
                "type": "object",
                "properties": {
                    "max": {
                        "type": "integer",
                        "description": "Largest number that may be returned"
                    }
                },
                "required": ["max"]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stays_within_bounds() {
        let args = HashMap::from([("max".to_string(), json!(10))]);
        for _ in 0..100 {
            let n = RandomNumberTool.run(&args).await.unwrap().as_i64().unwrap();
            assert!((0..=10).contains(&n));
        }
    }

    #[tokio::test]
    async fn test_zero_max() {
        let args = HashMap::from([("max".to_string(), json!(0))]);
        assert_eq!(RandomNumberTool.run(&args).await.unwrap(), json!(0));
    }

    #[tokio::test]
    async fn test_negative_max_is_error() {
        let args = HashMap::from([("max".to_string(), json!(-1))]);
        assert!(matches!(RandomNumberTool.run(&args).await, Err(AgentRunError::ToolError(_))));
    }

    #[tokio::test]
    async fn test_missing_max_is_error() {
        assert!(RandomNumberTool.run(&HashMap::new()).await.is_err());
    }

    #[test]
    fn test_descriptor() {
        assert_eq!(RandomNumberTool.name(), "random_number");
    }
}
