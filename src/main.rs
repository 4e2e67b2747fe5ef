//! MCP server for the api.video REST API.
//!
//! Usage:
//!   APIVIDEO_BEARER_TOKEN=... apivideo-mcp            # serve MCP on stdio
//!   apivideo-mcp list --filter live
//!   apivideo-mcp call get_videos_videoId --args '{"videoId":"vi123"}'
//!
//! Settings are also read from a `.env` file in the working directory.
//! Logs go to stderr; stdout carries the protocol.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use apivideo_mcp::config::{DEFAULT_BASE_URL, ENV_BASE_URL, ENV_BEARER_TOKEN, ENV_TIMEOUT_SECS};
use apivideo_mcp::{ApiConfig, ConfigError, McpServer, ToolRegistry};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "apivideo-mcp", version, about = "Expose the api.video REST API as MCP tools")]
struct Cli {
    /// API base URL
    #[arg(long, global = true, env = ENV_BASE_URL, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = ENV_BEARER_TOKEN, hide_env_values = true)]
    bearer_token: Option<String>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve MCP over stdin/stdout (default)
    Serve,
    /// Print tool definitions
    List {
        /// Only tools whose name or description matches
        #[arg(long)]
        filter: Option<String>,
    },
    /// Invoke one tool and print its result
    Call {
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

fn build_config(cli: &Cli) -> Result<ApiConfig, ConfigError> {
    let mut config = ApiConfig::new(&cli.base_url)?;
    if let Some(ref token) = cli.bearer_token {
        config = config.with_bearer_token(token.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs))?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(base_url = %config.base_url(), "configured");

    let registry = match ToolRegistry::with_catalog(config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(registry).await,
        Command::List { filter } => list(&registry, filter.as_deref()),
        Command::Call { tool, args } => call(&registry, &tool, &args).await,
    }
}

async fn serve(registry: ToolRegistry) -> ExitCode {
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    match McpServer::new(Arc::new(registry)).serve_stdio(cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn list(registry: &ToolRegistry, filter: Option<&str>) -> ExitCode {
    let tools = match filter {
        Some(q) => registry.search(q),
        None => registry.schemas(),
    };
    match serde_json::to_string_pretty(&tools) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn call(registry: &ToolRegistry, tool: &str, args: &str) -> ExitCode {
    let args: Value = match serde_json::from_str(args) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: --args is not valid JSON: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = registry.execute(tool, &args).await;
    if result.is_error() {
        eprintln!("{}", result.text());
        ExitCode::FAILURE
    } else {
        println!("{}", result.text());
        ExitCode::SUCCESS
    }
}
