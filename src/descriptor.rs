use std::fmt;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::ToolError;
use crate::types::{ParamKind, ParamLocation};

type DecodeFn = fn(&[u8]) -> serde_json::Result<Value>;

/// A serde record type with its concrete type erased.
///
/// Decoding goes through `T`, so only fields `T` declares survive and its
/// `rename` mapping applies. The result is handed back as a JSON value.
#[derive(Clone, Copy)]
pub struct Shape {
    name: &'static str,
    decode: DecodeFn,
}

impl Shape {
    pub fn of<T: Serialize + DeserializeOwned>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            decode: decode_as::<T>,
        }
    }

    /// Accepts any JSON document as-is.
    pub fn untyped() -> Self {
        Self {
            name: "object",
            decode: decode_as::<Value>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn decode(&self, bytes: &[u8]) -> serde_json::Result<Value> {
        (self.decode)(bytes)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shape").field(&self.name).finish()
    }
}

fn decode_as<T: Serialize + DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<Value> {
    let typed: T = serde_json::from_slice(bytes)?;
    serde_json::to_value(typed)
}

/// One declared tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

/// Static declaration of one REST operation.
///
/// Built once with the chained constructors below and never mutated after
/// registration.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    name: String,
    description: &'static str,
    method: Method,
    path: &'static str,
    params: Vec<ParamSpec>,
    body: Option<Shape>,
    response: Shape,
}

impl EndpointDescriptor {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            name: default_tool_name(&method, path),
            description: "",
            method,
            path,
            params: Vec::new(),
            body: None,
            response: Shape::untyped(),
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: &'static str) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Override the derived `<method>_<path>` tool name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Path parameters are always required strings.
    pub fn path_param(self, name: &'static str, description: &'static str) -> Self {
        self.param(name, ParamKind::String, ParamLocation::Path, true, description)
    }

    pub fn query(self, name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        self.param(name, kind, ParamLocation::Query, false, description)
    }

    pub fn field(self, name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        self.param(name, kind, ParamLocation::Body, false, description)
    }

    pub fn required_field(
        self,
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
    ) -> Self {
        self.param(name, kind, ParamLocation::Body, true, description)
    }

    pub fn param(
        mut self,
        name: &'static str,
        kind: ParamKind,
        location: ParamLocation,
        required: bool,
        description: &'static str,
    ) -> Self {
        self.params.push(ParamSpec {
            name,
            kind,
            location,
            required,
            description,
        });
        self
    }

    /// Declare the typed request body. The argument map is conformed to `T`.
    pub fn body<T: Serialize + DeserializeOwned>(mut self) -> Self {
        self.body = Some(Shape::of::<T>());
        self
    }

    /// Declare the typed response. Without this the response is untyped.
    pub fn returns<T: Serialize + DeserializeOwned>(mut self) -> Self {
        self.response = Shape::of::<T>();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        self.description
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(move |p| p.location == location)
    }

    pub fn body_shape(&self) -> Option<Shape> {
        self.body
    }

    pub fn response_shape(&self) -> Shape {
        self.response
    }

    /// Placeholder names referenced by the path template, in order.
    pub fn placeholders(&self) -> Result<Vec<&'static str>, String> {
        placeholders(self.path)
    }

    /// Check that the path template and the parameter list agree.
    pub fn validate(&self) -> Result<(), ToolError> {
        let invalid = |reason: String| ToolError::InvalidDescriptor {
            tool: self.name.clone(),
            reason,
        };

        if self.name.is_empty() {
            return Err(invalid("empty tool name".into()));
        }
        if !self.path.starts_with('/') {
            return Err(invalid(format!("path {:?} must start with '/'", self.path)));
        }

        for (i, p) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|q| q.name == p.name) {
                return Err(invalid(format!("duplicate parameter {:?}", p.name)));
            }
        }

        let placeholders = self.placeholders().map_err(invalid)?;
        for name in &placeholders {
            if !self.params_in(ParamLocation::Path).any(|p| p.name == *name) {
                return Err(invalid(format!("placeholder {{{name}}} has no path parameter")));
            }
        }
        for p in self.params_in(ParamLocation::Path) {
            if !placeholders.contains(&p.name) {
                return Err(invalid(format!(
                    "path parameter {:?} is not in the template",
                    p.name
                )));
            }
            if !p.required {
                return Err(invalid(format!("path parameter {:?} must be required", p.name)));
            }
        }
        Ok(())
    }

    /// Tool definition as listed by MCP `tools/list`.
    pub fn schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for p in &self.params {
            let mut prop = json!({
                "type": p.kind.schema_type(),
                "description": p.description,
            });
            if p.kind == ParamKind::Array {
                prop["items"] = json!({});
            }
            properties.insert(p.name.to_string(), prop);
            if p.required {
                required.push(Value::String(p.name.to_string()));
            }
        }

        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

/// `GET /videos/{videoId}/chapters` becomes `get_videos_videoId_chapters`.
fn default_tool_name(method: &Method, path: &str) -> String {
    let path = path
        .trim_matches('/')
        .replace('/', "_")
        .replace(['{', '}'], "");
    if path.is_empty() {
        method.as_str().to_lowercase()
    } else {
        format!("{}_{}", method.as_str().to_lowercase(), path)
    }
}

pub(crate) fn placeholders(template: &'static str) -> Result<Vec<&'static str>, String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        if rest[..start].contains('}') {
            return Err(format!("stray '}}' in {template:?}"));
        }
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| format!("unterminated placeholder in {template:?}"))?;
        let name = &after[..end];
        if name.is_empty() || name.contains('{') {
            return Err(format!("malformed placeholder in {template:?}"));
        }
        names.push(name);
        rest = &after[end + 1..];
    }
    if rest.contains('}') {
        return Err(format!("stray '}}' in {template:?}"));
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Renamed {
        #[serde(skip_serializing_if = "Option::is_none")]
        player_id: Option<String>,
    }

    fn chapter_lookup() -> EndpointDescriptor {
        EndpointDescriptor::get("/videos/{videoId}/chapters/{language}")
            .describe("Show a chapter")
            .path_param("videoId", "The video")
            .path_param("language", "BCP 47 tag")
    }

    #[test]
    fn derives_tool_names() {
        assert_eq!(chapter_lookup().name(), "get_videos_videoId_chapters_language");
        assert_eq!(
            EndpointDescriptor::post("/live-streams").name(),
            "post_live-streams"
        );
        assert_eq!(
            EndpointDescriptor::post("/auth/api-key").named("authenticate").name(),
            "authenticate"
        );
    }

    #[test]
    fn extracts_placeholders_in_order() {
        assert_eq!(
            chapter_lookup().placeholders().unwrap(),
            vec!["videoId", "language"]
        );
        assert!(placeholders("/videos/{videoId").is_err());
        assert!(placeholders("/videos/videoId}").is_err());
    }

    #[test]
    fn valid_descriptor_passes() {
        chapter_lookup().validate().unwrap();
    }

    #[test]
    fn placeholder_without_param_is_rejected() {
        let desc = EndpointDescriptor::get("/videos/{videoId}");
        let err = desc.validate().unwrap_err();
        assert!(matches!(err, ToolError::InvalidDescriptor { .. }));
        assert!(err.to_string().contains("{videoId}"));
    }

    #[test]
    fn path_param_missing_from_template_is_rejected() {
        let desc = EndpointDescriptor::get("/videos").path_param("videoId", "");
        assert!(desc.validate().is_err());
    }

    #[test]
    fn optional_path_param_is_rejected() {
        let desc = EndpointDescriptor::get("/videos/{videoId}").param(
            "videoId",
            ParamKind::String,
            ParamLocation::Path,
            false,
            "",
        );
        assert!(desc.validate().is_err());
    }

    #[test]
    fn duplicate_param_is_rejected() {
        let desc = EndpointDescriptor::get("/videos")
            .query("title", ParamKind::String, "")
            .field("title", ParamKind::String, "");
        assert!(desc.validate().is_err());
    }

    #[test]
    fn schema_lists_params_and_required() {
        let schema = EndpointDescriptor::get("/videos/{videoId}")
            .describe("Retrieve a video object")
            .path_param("videoId", "The video")
            .query("tags", ParamKind::Array, "Filter by tags")
            .schema();

        assert_eq!(schema["name"], "get_videos_videoId");
        assert_eq!(schema["description"], "Retrieve a video object");
        let input = &schema["inputSchema"];
        assert_eq!(input["type"], "object");
        assert_eq!(input["properties"]["videoId"]["type"], "string");
        assert_eq!(input["properties"]["tags"]["type"], "array");
        assert!(input["properties"]["tags"]["items"].is_object());
        assert_eq!(input["required"], json!(["videoId"]));
    }

    #[test]
    fn typed_shape_drops_unknown_fields() {
        let shape = Shape::of::<Renamed>();
        let value = shape
            .decode(br#"{"playerId":"pt1","videoId":"vi1"}"#)
            .unwrap();
        assert_eq!(value, json!({"playerId": "pt1"}));
    }

    #[test]
    fn untyped_shape_keeps_everything() {
        let value = Shape::untyped().decode(br#"{"a":[1,2]}"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
        assert!(Shape::untyped().decode(b"").is_err());
    }
}
