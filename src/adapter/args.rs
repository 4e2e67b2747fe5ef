use serde_json::{Map, Number, Value};

use crate::descriptor::EndpointDescriptor;
use crate::error::ToolError;
use crate::types::{ParamKind, ParamLocation};

/// Invocation arguments after validation against a descriptor.
#[derive(Debug, Clone)]
pub(crate) struct BoundArgs {
    /// Every caller argument, with declared non-path params coerced toward
    /// their kind. Unknown keys are kept; the URL builder and body shape
    /// ignore them.
    pub values: Map<String, Value>,
    /// Path parameter values keyed by placeholder name.
    pub path: Vec<(&'static str, String)>,
}

impl BoundArgs {
    pub fn path_value(&self, name: &str) -> Option<&str> {
        self.path
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Validate `input` against the descriptor. Stops at the first violation.
pub(crate) fn bind(descriptor: &EndpointDescriptor, input: &Value) -> Result<BoundArgs, ToolError> {
    let mut values = match input {
        Value::Object(map) => map.clone(),
        _ => return Err(ToolError::InvalidArguments),
    };

    let mut path = Vec::new();
    for p in descriptor.params_in(ParamLocation::Path) {
        match values.get(p.name) {
            None if p.required => {
                return Err(ToolError::MissingPathParameter(p.name.to_string()));
            }
            None => {}
            Some(Value::String(s)) => path.push((p.name, s.clone())),
            Some(_) => return Err(ToolError::InvalidPathParameter(p.name.to_string())),
        }
    }

    for p in descriptor.params() {
        if p.location == ParamLocation::Path {
            continue;
        }
        if let Some(value) = values.get_mut(p.name) {
            let coerced = coerce(p.kind, value.take());
            *value = coerced;
        }
    }

    Ok(BoundArgs { values, path })
}

/// Best-effort conversion toward the declared kind. Never fails: a value
/// that can't be converted is passed through untouched.
pub(crate) fn coerce(kind: ParamKind, value: Value) -> Value {
    match (kind, value) {
        (ParamKind::Boolean, Value::String(s)) => match s.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(s),
        },
        (ParamKind::Number, Value::String(s)) => parse_number(s.trim())
            .map(Value::Number)
            .unwrap_or(Value::String(s)),
        (ParamKind::String, Value::Number(n)) => Value::String(n.to_string()),
        (ParamKind::String, Value::Bool(b)) => Value::String(b.to_string()),
        (ParamKind::Array, Value::Null) => Value::Null,
        (ParamKind::Array, Value::Array(items)) => Value::Array(items),
        (ParamKind::Array, scalar) => Value::Array(vec![scalar]),
        (_, other) => other,
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = s.parse::<u64>() {
        return Some(Number::from(u));
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}
