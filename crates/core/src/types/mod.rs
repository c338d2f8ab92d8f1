//! Shared type aliases and small data shapes

pub mod reducer;

pub use reducer::{Dispatch, Reducer, ReducerAction};

/// A string-keyed bag of arbitrary JSON values
pub type Pojo = serde_json::Map<String, serde_json::Value>;

/// An object known to hold only JSON-compatible values, e.g. the output of
/// `serde_json::from_str`
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Parse a JSON document whose top level must be an object
pub fn parse_json_object(input: &str) -> crate::Result<JsonObject> {
    match serde_json::from_str::<serde_json::Value>(input)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(crate::Error::usage(
            "parse_json_object",
            format!("expected a JSON object, found {}", json_kind(&other)),
        )),
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
