//! Deep cloning of [`Value`] graphs.
//!
//! Primitives are copied by value and pending values by reference. Lists
//! and records are rebuilt element by element. Custom values copy
//! themselves through [`Cloneable`](fnkit_core::Cloneable); anything else is
//! handled according to [`OpaquePolicy`].
//!
//! A list or record that is reached again while it is still being copied is
//! a cycle and is reported as [`Error::CycleDetected`]. Structures that are
//! merely shared (reachable twice without a cycle) are copied once per
//! occurrence.

mod config;

pub use config::{CloneConfig, OpaquePolicy};

use fnkit_core::{Cloner, Error, Result, Value, VALUE_PATH_ROOT};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Deep-clone `value` with the default configuration
pub fn deep_clone(value: &Value) -> Result<Value> {
    deep_clone_with(value, &CloneConfig::default())
}

/// Deep-clone `value` with an explicit configuration
pub fn deep_clone_with(value: &Value, config: &CloneConfig) -> Result<Value> {
    DeepCloner::new(config)?.clone_value(value)
}

/// A single deep-clone pass
#[derive(Debug)]
pub struct DeepCloner<'a> {
    config: &'a CloneConfig,
    path: Vec<String>,
    active: HashSet<usize>,
    shared: usize,
}

impl<'a> DeepCloner<'a> {
    pub fn new(config: &'a CloneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            path: Vec::new(),
            active: HashSet::new(),
            shared: 0,
        })
    }

    /// Clone a root value
    pub fn clone_value(&mut self, value: &Value) -> Result<Value> {
        self.visit(value)
    }

    /// Number of opaque values copied by reference so far
    pub fn shared_references(&self) -> usize {
        self.shared
    }

    fn current_path(&self) -> String {
        let mut path = String::from(VALUE_PATH_ROOT);
        for segment in &self.path {
            path.push_str(segment);
        }
        path
    }

    fn visit(&mut self, value: &Value) -> Result<Value> {
        if self.path.len() > self.config.max_depth {
            return Err(Error::depth_exceeded(
                self.current_path(),
                self.config.max_depth,
            ));
        }

        match value {
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Symbol(_)
            | Value::Pending(_) => Ok(value.clone()),
            Value::Custom(custom) => custom.clone_value(self),
            Value::List(list) => {
                let id = Arc::as_ptr(list) as usize;
                self.enter(id)?;
                // Snapshot the handles so no lock is held while recursing
                let items = list.read().clone();
                let copied = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.child(format!("[{i}]"), item))
                    .collect::<Result<Vec<_>>>();
                self.active.remove(&id);
                copied.map(Value::list)
            }
            Value::Record(record) => {
                let id = Arc::as_ptr(record) as usize;
                self.enter(id)?;
                let entries = record.read().clone();
                let copied = entries
                    .iter()
                    .map(|(key, item)| Ok((key.clone(), self.child(format!(".{key}"), item)?)))
                    .collect::<Result<IndexMap<_, _>>>();
                self.active.remove(&id);
                copied.map(Value::record)
            }
            Value::Opaque(_) => match self.config.on_opaque {
                OpaquePolicy::WarnAndShare => {
                    warn!(
                        path = %self.current_path(),
                        "cannot deep-clone opaque value, copying the reference instead"
                    );
                    self.shared += 1;
                    Ok(value.clone())
                }
                OpaquePolicy::Fail => Err(Error::uncloneable(
                    value.kind().to_string(),
                    self.current_path(),
                )),
            },
        }
    }

    fn enter(&mut self, id: usize) -> Result<()> {
        if self.active.insert(id) {
            Ok(())
        } else {
            Err(Error::cycle_detected(self.current_path()))
        }
    }

    fn child(&mut self, segment: String, value: &Value) -> Result<Value> {
        self.path.push(segment);
        let result = self.visit(value);
        self.path.pop();
        result
    }
}

impl Cloner for DeepCloner<'_> {
    fn clone_child(&mut self, segment: &str, value: &Value) -> Result<Value> {
        self.child(format!(".{segment}"), value)
    }
}
