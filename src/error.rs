#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("invalid arguments object")]
    InvalidArguments,
    #[error("missing required path parameter: {0}")]
    MissingPathParameter(String),
    #[error("invalid path parameter: {0}")]
    InvalidPathParameter(String),
    #[error("failed to encode request body: {0}")]
    RequestEncoding(String),
    #[error("failed to create request: {0}")]
    RequestCreation(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("failed to read response body: {0}")]
    ResponseRead(String),
    #[error("API returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to format JSON: {0}")]
    ResponseFormat(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("tool already registered: {0}")]
    DuplicateTool(String),
    #[error("invalid descriptor for {tool}: {reason}")]
    InvalidDescriptor { tool: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("invalid timeout {0:?}: expected whole seconds")]
    Timeout(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
