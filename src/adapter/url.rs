use reqwest::Url;
use serde_json::{Map, Value};

use super::args::BoundArgs;
use crate::descriptor::EndpointDescriptor;
use crate::error::ToolError;
use crate::types::ParamLocation;

/// Join the base URL, the substituted path template and the query string.
///
/// Path segments and query values are percent-encoded. Query parameters are
/// appended in declaration order; array values repeat the key once per
/// element and nulls are skipped.
pub(crate) fn build_url(
    base: &Url,
    descriptor: &EndpointDescriptor,
    args: &BoundArgs,
) -> Result<Url, ToolError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ToolError::RequestCreation(format!("{base} cannot be a base URL")))?;
        segments.pop_if_empty();
        for template in descriptor.path().split('/').filter(|s| !s.is_empty()) {
            segments.push(&substitute(template, args)?);
        }
    }

    let pairs = query_pairs(descriptor, &args.values);
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
    }
    Ok(url)
}

fn substitute(segment: &str, args: &BoundArgs) -> Result<String, ToolError> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            ToolError::RequestCreation(format!("unterminated placeholder in {segment:?}"))
        })?;
        let name = &after[..end];
        let value = args
            .path_value(name)
            .ok_or_else(|| ToolError::MissingPathParameter(name.to_string()))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn query_pairs(descriptor: &EndpointDescriptor, values: &Map<String, Value>) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    for p in descriptor.params_in(ParamLocation::Query) {
        match values.get(p.name) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((p.name, render(item)));
                }
            }
            Some(value) => pairs.push((p.name, render(value))),
        }
    }
    pairs
}

/// Plain text for scalars, compact JSON for anything nested.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
