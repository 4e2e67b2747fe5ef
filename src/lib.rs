pub mod adapter;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod models;
pub mod server;
pub mod tools;
pub mod types;

pub use adapter::{invoke, HttpTool};
pub use config::ApiConfig;
pub use descriptor::{EndpointDescriptor, ParamSpec, Shape};
pub use error::{ConfigError, ToolError};
pub use server::McpServer;
pub use tools::{ToolDef, ToolHandler, ToolRegistry};
pub use types::{ParamKind, ParamLocation, ToolResult};
