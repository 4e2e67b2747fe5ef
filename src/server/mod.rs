//! MCP server over newline-delimited JSON-RPC.
//!
//! Requests are read line by line. Everything except `tools/call` is
//! answered inline; each tool call runs on its own task so a slow upstream
//! never holds up the read loop. All responses funnel through one writer
//! task, which keeps lines on the output intact.

pub mod protocol;

use std::io;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::tools::ToolRegistry;
use protocol::{
    CallToolParams, Implementation, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestId,
    JSON_RPC_VERSION, PROTOCOL_VERSION,
};

/// What the read loop does with one input line.
enum Dispatch {
    Reply(JsonRpcResponse),
    Call {
        id: RequestId,
        params: CallToolParams,
    },
    Ignore,
}

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: Implementation,
}

impl McpServer {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            info: Implementation::default(),
        }
    }

    pub fn with_info(mut self, info: Implementation) -> Self {
        self.info = info;
        self
    }

    /// Serve on the process's stdin/stdout until EOF or cancellation.
    pub async fn serve_stdio(&self, cancel: CancellationToken) -> io::Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), cancel)
            .await
    }

    /// Serve on any line-oriented reader and writer.
    ///
    /// Lines that are not UTF-8 or not JSON get a parse error reply and the
    /// loop goes on. Only a read failure, closed output, EOF or
    /// cancellation stops it. On EOF, in-flight tool calls are allowed to
    /// finish and their responses are written. On cancellation they are
    /// aborted.
    pub async fn serve<R, W>(
        &self,
        mut reader: R,
        writer: W,
        cancel: CancellationToken,
    ) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(
            tools = self.registry.len(),
            server = %self.info.name,
            "MCP server started"
        );

        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let writer_task = tokio::spawn(write_loop(writer, rx));
        let mut calls = JoinSet::new();
        let mut buf = Vec::new();
        let mut read_error = None;

        loop {
            reap(&mut calls);
            buf.clear();

            let read = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                _ = tx.closed() => {
                    warn!("output closed");
                    break;
                }
                read = reader.read_until(b'\n', &mut buf) => read,
            };
            match read {
                Ok(0) => {
                    debug!("input closed");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    read_error = Some(e);
                    break;
                }
            }

            let dispatch = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.dispatch(line),
                Err(e) => {
                    warn!(error = %e, "request is not valid UTF-8");
                    Dispatch::Reply(JsonRpcResponse::error(
                        None,
                        JsonRpcError::parse_error(format!("parse error: {e}")),
                    ))
                }
            };

            match dispatch {
                Dispatch::Reply(response) => {
                    if tx.send(response).is_err() {
                        warn!("output closed");
                        break;
                    }
                }
                Dispatch::Call { id, params } => {
                    let registry = Arc::clone(&self.registry);
                    let tx = tx.clone();
                    calls.spawn(async move {
                        let result = registry.execute(&params.name, &params.arguments).await;
                        let _ = tx.send(JsonRpcResponse::success(id, result.to_mcp()));
                    });
                }
                Dispatch::Ignore => {}
            }
        }

        if cancel.is_cancelled() {
            calls.abort_all();
        }
        while calls.join_next().await.is_some() {}
        drop(tx);

        let written = writer_task.await.map_err(io::Error::other)?;
        info!("MCP server stopped");
        match read_error {
            Some(e) => Err(e),
            None => written,
        }
    }

    fn dispatch(&self, line: &str) -> Dispatch {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return Dispatch::Reply(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(format!("parse error: {e}")),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(r) => r,
            Err(e) => {
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value(id.clone()).ok());
                return Dispatch::Reply(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(format!("invalid request: {e}")),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification");
            return Dispatch::Ignore;
        };
        if request.jsonrpc != JSON_RPC_VERSION {
            return Dispatch::Reply(JsonRpcResponse::error(
                Some(id),
                JsonRpcError::invalid_request(format!(
                    "unsupported jsonrpc version: {}",
                    request.jsonrpc
                )),
            ));
        }

        debug!(method = %request.method, ?id, "request");
        let result = match request.method.as_str() {
            "initialize" => self.initialize(),
            "ping" => json!({}),
            "tools/list" => json!({ "tools": self.registry.schemas() }),
            "tools/call" => {
                let params = request.params.unwrap_or(Value::Null);
                return match serde_json::from_value::<CallToolParams>(params) {
                    Ok(params) => Dispatch::Call { id, params },
                    Err(e) => Dispatch::Reply(JsonRpcResponse::error(
                        Some(id),
                        JsonRpcError::invalid_params(format!("invalid tools/call params: {e}")),
                    )),
                };
            }
            other => {
                return Dispatch::Reply(JsonRpcResponse::error(
                    Some(id),
                    JsonRpcError::method_not_found(other),
                ))
            }
        };
        Dispatch::Reply(JsonRpcResponse::success(id, result))
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": { "listChanged": false } },
            "serverInfo": self.info,
        })
    }
}

async fn write_loop<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_vec(&response)?;
        line.push(b'\n');
        writer.write_all(&line).await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Drop finished tool-call tasks. Returns how many were removed.
fn reap(calls: &mut JoinSet<()>) -> usize {
    let mut reaped = 0;
    while calls.try_join_next().is_some() {
        reaped += 1;
    }
    reaped
}
