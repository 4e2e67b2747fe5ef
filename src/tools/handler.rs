use async_trait::async_trait;
use serde_json::Value;

use crate::error::ToolError;

/// A tool's execution handler. [`crate::HttpTool`] is the built-in one; hosts
/// may register their own.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, input: &Value) -> Result<String, ToolError>;
}

/// A tool definition: schema for the host + handler for execution.
pub struct ToolDef {
    pub name: String,
    pub schema: Value,
    pub(crate) handler: Box<dyn ToolHandler>,
}
