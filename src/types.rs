use serde_json::{json, Value};

use crate::error::ToolError;

/// Outcome of a single tool invocation. Exactly one variant per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    /// Pretty-printed JSON, or raw upstream text when it didn't parse.
    Success(String),
    /// Human-readable error message.
    Failure(String),
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ToolResult::Failure(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ToolResult::Success(text) | ToolResult::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ToolResult::Success(text) | ToolResult::Failure(text) => text,
        }
    }

    /// MCP `tools/call` result payload.
    pub fn to_mcp(&self) -> Value {
        json!({
            "content": [{ "type": "text", "text": self.text() }],
            "isError": self.is_error(),
        })
    }
}

impl From<Result<String, ToolError>> for ToolResult {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => ToolResult::Success(text),
            Err(e) => ToolResult::Failure(e.to_string()),
        }
    }
}

/// Primitive kind of a tool parameter, as advertised in the tool schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
}

impl ParamKind {
    /// JSON schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
        }
    }
}

/// Where a parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_becomes_failure() {
        let result: ToolResult =
            Err::<String, _>(ToolError::MissingPathParameter("videoId".into())).into();
        assert!(result.is_error());
        assert_eq!(result.text(), "missing required path parameter: videoId");
    }

    #[test]
    fn mcp_payload_carries_error_flag() {
        let ok = ToolResult::Success("{}".into()).to_mcp();
        assert_eq!(ok["isError"], false);
        assert_eq!(ok["content"][0]["type"], "text");
        assert_eq!(ok["content"][0]["text"], "{}");

        let failed = ToolResult::Failure("boom".into()).to_mcp();
        assert_eq!(failed["isError"], true);
    }
}
