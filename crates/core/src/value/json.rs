//! Conversions between [`Value`] and `serde_json::Value`

use super::Value;
use crate::errors::{Error, Result};
use std::collections::HashSet;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::list(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::record(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_json(value, "$", &mut HashSet::new())
    }
}

impl Value {
    /// Convert into JSON. Pending, custom, opaque and symbol values have no
    /// JSON form; neither do non-finite numbers or cycles.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::Value::try_from(self)
    }
}

fn to_json(value: &Value, path: &str, active: &mut HashSet<usize>) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Number(n) => number_to_json(*n)
            .ok_or_else(|| Error::usage("Value::to_json", format!("{n} at '{path}' is not finite"))),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::List(list) => {
            let id = std::sync::Arc::as_ptr(list) as usize;
            if !active.insert(id) {
                return Err(Error::cycle_detected(path));
            }
            let items = list
                .read()
                .iter()
                .enumerate()
                .map(|(i, item)| to_json(item, &format!("{path}[{i}]"), active))
                .collect::<Result<Vec<_>>>()?;
            active.remove(&id);
            Ok(serde_json::Value::Array(items))
        }
        Value::Record(record) => {
            let id = std::sync::Arc::as_ptr(record) as usize;
            if !active.insert(id) {
                return Err(Error::cycle_detected(path));
            }
            let map = record
                .read()
                .iter()
                .map(|(k, v)| Ok((k.clone(), to_json(v, &format!("{path}.{k}"), active)?)))
                .collect::<Result<serde_json::Map<_, _>>>()?;
            active.remove(&id);
            Ok(serde_json::Value::Object(map))
        }
        other => Err(Error::usage(
            "Value::to_json",
            format!("{} value at '{path}' has no JSON representation", other.kind()),
        )),
    }
}

fn number_to_json(n: f64) -> Option<serde_json::Value> {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Some(serde_json::Value::from(n as i64));
    }
    serde_json::Number::from_f64(n).map(serde_json::Value::Number)
}
