use std::sync::Arc;

use serde_json::{json, Value};
use tracing::warn;

use super::handler::{ToolDef, ToolHandler};
use crate::adapter::HttpTool;
use crate::config::ApiConfig;
use crate::descriptor::EndpointDescriptor;
use crate::error::ToolError;
use crate::types::ToolResult;

/// Catalog of available tools. Stores definitions, provides schemas,
/// looks up handlers by name, and offers keyword search for discovery.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding every endpoint in the built-in catalog.
    pub fn with_catalog(config: Arc<ApiConfig>) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        for descriptor in crate::catalog::all() {
            registry.register(descriptor, Arc::clone(&config))?;
        }
        Ok(registry)
    }

    /// Validate a descriptor and register an [`HttpTool`] for it.
    pub fn register(
        &mut self,
        descriptor: EndpointDescriptor,
        config: Arc<ApiConfig>,
    ) -> Result<(), ToolError> {
        descriptor.validate()?;
        let name = descriptor.name().to_string();
        let schema = descriptor.schema();
        self.insert(name, schema, HttpTool::new(descriptor, config))
    }

    /// Register a custom handler. The schema is the complete tool definition
    /// (name, description, inputSchema) listed to the host.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        schema: Value,
        handler: impl ToolHandler + 'static,
    ) -> Result<(), ToolError> {
        let name = name.into();
        if self.tools.iter().any(|t| t.name == name) {
            return Err(ToolError::DuplicateTool(name));
        }
        self.tools.push(ToolDef {
            name,
            schema,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// All tool schemas, in registration order.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|t| t.schema.clone()).collect()
    }

    /// Schema for a specific tool by name.
    pub fn schema(&self, name: &str) -> Option<&Value> {
        self.tools.iter().find(|t| t.name == name).map(|t| &t.schema)
    }

    /// Run a tool by name. Never fails: unknown tools and handler errors
    /// become [`ToolResult::Failure`].
    pub async fn execute(&self, name: &str, input: &Value) -> ToolResult {
        let Some(tool) = self.tools.iter().find(|t| t.name == name) else {
            warn!(tool = name, "call to unknown tool");
            return ToolResult::Failure(ToolError::UnknownTool(name.to_string()).to_string());
        };

        match tool.handler.call(input).await {
            Ok(text) => ToolResult::Success(text),
            Err(e) => {
                warn!(tool = name, error = %e, "tool call failed");
                ToolResult::Failure(e.to_string())
            }
        }
    }

    /// Search tools by query. Matches against name and description.
    /// Returns compact summaries (name + description only, no inputSchema).
    /// Backs `apivideo-mcp list --filter`.
    pub fn search(&self, query: &str) -> Vec<Value> {
        let query_lower = query.to_lowercase();
        let terms: Vec<&str> = query_lower.split_whitespace().collect();

        self.tools
            .iter()
            .filter(|t| {
                let name = t.name.to_lowercase();
                let desc = t.schema["description"]
                    .as_str()
                    .unwrap_or("")
                    .to_lowercase();
                let haystack = format!("{name} {desc}");

                terms.iter().any(|term| haystack.contains(term))
            })
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.schema["description"],
                })
            })
            .collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
