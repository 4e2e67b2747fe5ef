//! The generic HTTP tool adapter.
//!
//! One [`HttpTool`] per endpoint descriptor. Every call performs at most one
//! upstream request and always produces a result; failures come back as
//! [`ToolError`] values.

mod args;
mod url;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ApiConfig;
use crate::descriptor::{EndpointDescriptor, Shape};
use crate::error::ToolError;
use crate::models::ApiProblem;
use crate::tools::ToolHandler;
use crate::types::ToolResult;

/// Tool handler that maps one descriptor onto one HTTP round trip.
pub struct HttpTool {
    descriptor: EndpointDescriptor,
    config: Arc<ApiConfig>,
}

impl HttpTool {
    pub fn new(descriptor: EndpointDescriptor, config: Arc<ApiConfig>) -> Self {
        Self { descriptor, config }
    }

    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    /// Run the call and fold the outcome into a [`ToolResult`].
    pub async fn invoke(&self, input: &Value) -> ToolResult {
        invoke(&self.descriptor, input, &self.config).await.into()
    }
}

#[async_trait]
impl ToolHandler for HttpTool {
    async fn call(&self, input: &Value) -> Result<String, ToolError> {
        invoke(&self.descriptor, input, &self.config).await
    }
}

/// Validate, build, send, and render one request.
pub async fn invoke(
    descriptor: &EndpointDescriptor,
    input: &Value,
    config: &ApiConfig,
) -> Result<String, ToolError> {
    let args = args::bind(descriptor, input)?;
    let url = url::build_url(config.base_url(), descriptor, &args)?;

    let body = descriptor
        .body_shape()
        .map(|shape| encode_body(shape, &args.values))
        .transpose()?;

    let mut builder = config
        .client()
        .request(descriptor.method().clone(), url.clone())
        .header(ACCEPT, "application/json");
    if let Some(bytes) = body {
        builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
    }
    if let Some(token) = config.bearer_token() {
        builder = builder.bearer_auth(token);
    }
    let request = builder
        .build()
        .map_err(|e| ToolError::RequestCreation(e.to_string()))?;

    debug!(
        tool = descriptor.name(),
        method = %descriptor.method(),
        url = %url,
        "dispatching request"
    );

    let response = config
        .client()
        .execute(request)
        .await
        .map_err(|e| ToolError::RequestFailed(e.to_string()))?;

    let status = response.status().as_u16();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ToolError::ResponseRead(e.to_string()))?;

    if status >= 400 {
        if let Ok(problem) = serde_json::from_slice::<ApiProblem>(&bytes) {
            debug!(
                tool = descriptor.name(),
                status,
                title = problem.title.as_deref().unwrap_or_default(),
                "upstream rejected request"
            );
        }
        return Err(ToolError::Upstream {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    render_response(descriptor.response_shape(), &bytes)
}

/// Serialize the arguments, then read them back through the body shape so
/// only fields the shape declares are sent.
fn encode_body(shape: Shape, values: &Map<String, Value>) -> Result<Vec<u8>, ToolError> {
    let raw = serde_json::to_vec(values)
        .map_err(|e| ToolError::RequestEncoding(format!("failed to marshal arguments: {e}")))?;
    let conformed = shape.decode(&raw).map_err(|e| {
        ToolError::RequestEncoding(format!(
            "failed to convert arguments to {}: {e}",
            shape.name()
        ))
    })?;
    serde_json::to_vec(&conformed).map_err(|e| ToolError::RequestEncoding(e.to_string()))
}

/// Pretty JSON when the body fits the declared shape, raw text otherwise.
fn render_response(shape: Shape, bytes: &[u8]) -> Result<String, ToolError> {
    match shape.decode(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .map_err(|e| ToolError::ResponseFormat(e.to_string())),
        Err(e) => {
            debug!(
                shape = shape.name(),
                error = %e,
                "response does not match declared shape, returning raw text"
            );
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Page, Video, VideoCreationPayload, VideoUpdatePayload};
    use crate::types::ParamKind;
    use httpmock::Method::{DELETE, GET, PATCH, POST};
    use httpmock::MockServer;
    use serde_json::json;

    fn config_for(server: &MockServer) -> Arc<ApiConfig> {
        Arc::new(ApiConfig::new(&server.base_url()).unwrap())
    }

    fn get_video() -> EndpointDescriptor {
        EndpointDescriptor::get("/videos/{videoId}")
            .describe("Retrieve a video object")
            .path_param("videoId", "The video")
            .returns::<Video>()
    }

    fn update_video() -> EndpointDescriptor {
        EndpointDescriptor::patch("/videos/{videoId}")
            .path_param("videoId", "The video")
            .field("title", ParamKind::String, "")
            .field("public", ParamKind::Boolean, "")
            .body::<VideoUpdatePayload>()
            .returns::<Video>()
    }

    #[tokio::test]
    async fn missing_path_param_makes_no_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200);
        });

        let tool = HttpTool::new(get_video(), config_for(&server));
        let result = tool.invoke(&json!({"title": "x"})).await;

        assert_eq!(
            result,
            ToolResult::Failure("missing required path parameter: videoId".into())
        );
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn non_object_arguments_make_no_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200);
        });

        let tool = HttpTool::new(get_video(), config_for(&server));
        for input in [json!(["vi1"]), Value::Null] {
            let result = tool.invoke(&input).await;
            assert_eq!(result, ToolResult::Failure("invalid arguments object".into()));
        }

        let list = EndpointDescriptor::get("/videos");
        let err = invoke(&list, &Value::Null, &config_for(&server))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::InvalidArguments);
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn typed_success_is_pretty_printed() {
        let server = MockServer::start();
        let upstream = json!({
            "videoId": "vi1",
            "title": "Maths video",
            "public": true,
            "tags": ["maths"]
        });
        let body = upstream.clone();
        let mock = server.mock(move |when, then| {
            when.method(GET)
                .path("/videos/vi1")
                .header("accept", "application/json");
            then.status(200).json_body(body);
        });

        let tool = HttpTool::new(get_video(), config_for(&server));
        let result = tool.invoke(&json!({"videoId": "vi1"})).await;

        mock.assert();
        assert!(!result.is_error());
        assert!(result.text().contains("\n  \"videoId\": \"vi1\""));
        let reparsed: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(reparsed, upstream);
    }

    #[tokio::test]
    async fn shape_mismatch_falls_back_to_raw_text() {
        let server = MockServer::start();
        let raw = r#"["not", "a", "video"]"#;
        server.mock(|when, then| {
            when.method(GET).path("/videos/vi1");
            then.status(200).body(raw);
        });

        let tool = HttpTool::new(get_video(), config_for(&server));
        let result = tool.invoke(&json!({"videoId": "vi1"})).await;

        assert_eq!(result, ToolResult::Success(raw.into()));
    }

    #[tokio::test]
    async fn non_json_body_falls_back_to_raw_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/videos/vi1");
            then.status(204);
        });

        let desc = EndpointDescriptor::delete("/videos/{videoId}").path_param("videoId", "");
        let tool = HttpTool::new(desc, config_for(&server));
        let result = tool.invoke(&json!({"videoId": "vi1"})).await;

        assert_eq!(result, ToolResult::Success(String::new()));
    }

    #[tokio::test]
    async fn upstream_error_embeds_raw_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/videos/missing");
            then.status(404).body(r#"{"error":"not found"}"#);
        });

        let tool = HttpTool::new(get_video(), config_for(&server));
        let err = invoke(tool.descriptor(), &json!({"videoId": "missing"}), &tool.config)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ToolError::Upstream {
                status: 404,
                body: r#"{"error":"not found"}"#.into()
            }
        );
        let result: ToolResult = Err::<String, _>(err).into();
        assert!(result.is_error());
        assert!(result.text().contains(r#"{"error":"not found"}"#));
    }

    #[tokio::test]
    async fn query_params_reach_upstream_in_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/videos")
                .query_param("title", "cats")
                .query_param("pageSize", "10");
            then.status(200)
                .json_body(json!({"data": [], "pagination": {"currentPage": 1}}));
        });

        let desc = EndpointDescriptor::get("/videos")
            .query("title", ParamKind::String, "")
            .query("pageSize", ParamKind::Number, "")
            .returns::<Page<Video>>();
        let tool = HttpTool::new(desc, config_for(&server));
        let result = tool.invoke(&json!({"pageSize": 10, "title": "cats"})).await;

        mock.assert();
        let reparsed: Value = serde_json::from_str(result.text()).unwrap();
        assert_eq!(reparsed["pagination"]["currentPage"], 1);
    }

    #[tokio::test]
    async fn body_keeps_declared_fields_only() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/videos/vi1")
                .header("content-type", "application/json")
                .json_body(json!({"title": "New title", "public": false}));
            then.status(200)
                .json_body(json!({"videoId": "vi1", "title": "New title", "public": false}));
        });

        let tool = HttpTool::new(update_video(), config_for(&server));
        let result = tool
            .invoke(&json!({
                "videoId": "vi1",
                "title": "New title",
                "public": "false",
                "sneaky": "dropped"
            }))
            .await;

        mock.assert();
        assert!(!result.is_error(), "{}", result.text());
    }

    #[tokio::test]
    async fn body_missing_required_field_is_an_encoding_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(201);
        });

        let desc = EndpointDescriptor::post("/videos")
            .required_field("title", ParamKind::String, "")
            .body::<VideoCreationPayload>()
            .returns::<Video>();
        let err = invoke(&desc, &json!({"description": "untitled"}), &config_for(&server))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::RequestEncoding(_)));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn bearer_token_only_when_configured() {
        let server = MockServer::start();
        let with_token = server.mock(|when, then| {
            when.method(POST)
                .path("/videos")
                .header("authorization", "Bearer secret");
            then.status(201).json_body(json!({"videoId": "vi1"}));
        });
        let desc = EndpointDescriptor::post("/videos")
            .body::<VideoCreationPayload>()
            .returns::<Video>();

        let config = Arc::new(
            ApiConfig::new(&server.base_url())
                .unwrap()
                .with_bearer_token("secret"),
        );
        let result = HttpTool::new(desc.clone(), config)
            .invoke(&json!({"title": "t"}))
            .await;
        assert!(!result.is_error(), "{}", result.text());
        with_token.assert();

        let anonymous = server.mock(|when, then| {
            when.method(POST)
                .path("/videos")
                .matches(|req| {
                    !req.headers
                        .as_ref()
                        .map(|headers| {
                            headers
                                .iter()
                                .any(|(k, _)| k.eq_ignore_ascii_case("authorization"))
                        })
                        .unwrap_or(false)
                });
            then.status(201).json_body(json!({"videoId": "vi2"}));
        });
        let result = HttpTool::new(desc, config_for(&server))
            .invoke(&json!({"title": "t"}))
            .await;
        assert!(!result.is_error(), "{}", result.text());
        anonymous.assert();
    }

    #[tokio::test]
    async fn unbuildable_request_is_a_creation_error() {
        let server = MockServer::start();
        let config = ApiConfig::new(&server.base_url())
            .unwrap()
            .with_bearer_token("bad\ntoken");

        let err = invoke(&get_video(), &json!({"videoId": "vi1"}), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::RequestCreation(_)), "{err:?}");
    }

    #[tokio::test]
    async fn connection_failure_is_reported_not_retried() {
        // Nothing listens on port 9 (discard) in the test environment.
        let config = ApiConfig::new("http://127.0.0.1:9").unwrap();
        let err = invoke(&get_video(), &json!({"videoId": "vi1"}), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::RequestFailed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn concurrent_calls_do_not_interfere() {
        let server = MockServer::start();
        for id in ["vi1", "vi2", "vi3"] {
            server.mock(move |when, then| {
                when.method(GET).path(format!("/videos/{id}"));
                then.status(200).json_body(json!({"videoId": id}));
            });
        }
        let tool = Arc::new(HttpTool::new(get_video(), config_for(&server)));

        let handles: Vec<_> = ["vi1", "vi2", "vi3"]
            .into_iter()
            .map(|id| {
                let tool = Arc::clone(&tool);
                tokio::spawn(async move { (id, tool.invoke(&json!({"videoId": id})).await) })
            })
            .collect();

        for handle in handles {
            let (id, result) = handle.await.unwrap();
            let value: Value = serde_json::from_str(result.text()).unwrap();
            assert_eq!(value["videoId"], id);
        }
    }

    #[tokio::test]
    async fn concurrent_calls_on_different_endpoints_keep_their_own_results() {
        let server = MockServer::start();
        let fetched = server.mock(|when, then| {
            when.method(GET).path("/videos/vi1");
            then.status(200)
                .json_body(json!({"videoId": "vi1", "title": "Fetched"}));
        });
        let patched = server.mock(|when, then| {
            when.method(PATCH)
                .path("/videos/vi2")
                .json_body(json!({"title": "Renamed"}));
            then.status(200)
                .json_body(json!({"videoId": "vi2", "title": "Renamed"}));
        });
        let deleted = server.mock(|when, then| {
            when.method(DELETE).path("/videos/gone");
            then.status(404).body(r#"{"title":"The requested resource was not found."}"#);
        });

        let config = config_for(&server);
        let get = HttpTool::new(get_video(), Arc::clone(&config));
        let patch = HttpTool::new(update_video(), Arc::clone(&config));
        let delete = HttpTool::new(
            EndpointDescriptor::delete("/videos/{videoId}").path_param("videoId", ""),
            config,
        );

        let get_args = json!({"videoId": "vi1"});
        let patch_args = json!({"videoId": "vi2", "title": "Renamed"});
        let delete_args = json!({"videoId": "gone"});
        let (got, updated, removed) = tokio::join!(
            get.invoke(&get_args),
            patch.invoke(&patch_args),
            delete.invoke(&delete_args),
        );

        fetched.assert();
        patched.assert();
        deleted.assert();

        let got: Value = serde_json::from_str(got.text()).unwrap();
        assert_eq!(got, json!({"videoId": "vi1", "title": "Fetched"}));

        assert!(!updated.is_error(), "{}", updated.text());
        let updated: Value = serde_json::from_str(updated.text()).unwrap();
        assert_eq!(updated, json!({"videoId": "vi2", "title": "Renamed"}));

        assert!(removed.is_error());
        assert!(removed.text().contains("The requested resource was not found."));
    }
}
