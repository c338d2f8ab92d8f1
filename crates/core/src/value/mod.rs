//! Dynamic value model used by the deep cloner.
//!
//! Lists and records are shared references: cloning a [`Value`] with
//! `Clone::clone` copies the handle, not the contents, so aliasing and
//! cycles can be expressed the same way they can in a garbage-collected
//! object graph. Copying contents is the job of a deep cloner.

mod cloneable;
mod json;

pub use cloneable::{Cloneable, Cloner};

use futures::future::{BoxFuture, FutureExt, Shared};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Shared, mutable ordered sequence
pub type List = Arc<RwLock<Vec<Value>>>;

/// Shared, mutable insertion-ordered record
pub type Record = Arc<RwLock<IndexMap<String, Value>>>;

/// A deferred value; every clone of the handle observes the same result
pub type PendingValue = Shared<BoxFuture<'static, Value>>;

/// A unique symbol. Two symbols are equal only if they are the same symbol,
/// regardless of description.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(description: impl AsRef<str>) -> Self {
        Self(Arc::from(description.as_ref()))
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// The kind of a [`Value`], for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Symbol,
    Pending,
    List,
    Record,
    Custom,
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Symbol => "symbol",
            ValueKind::Pending => "pending",
            ValueKind::List => "list",
            ValueKind::Record => "record",
            ValueKind::Custom => "custom",
            ValueKind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Pending(PendingValue),
    List(List),
    Record(Record),
    /// A value that knows how to copy itself
    Custom(Arc<dyn Cloneable>),
    /// Anything else; the cloner can only share or refuse it
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Build a fresh list
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items.into_iter().collect())))
    }

    /// Build a fresh record, keeping the given key order
    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<IndexMap<_, _>>();
        Value::Record(Arc::new(RwLock::new(map)))
    }

    /// Wrap a future as a pending value
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        Value::Pending(future.boxed().shared())
    }

    /// A pending value that is already resolved
    pub fn resolved(value: Value) -> Self {
        Value::pending(futures::future::ready(value))
    }

    pub fn custom<C: Cloneable + 'static>(value: C) -> Self {
        Value::Custom(Arc::new(value))
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(Arc::new(value))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Pending(_) => ValueKind::Pending,
            Value::List(_) => ValueKind::List,
            Value::Record(_) => ValueKind::Record,
            Value::Custom(_) => ValueKind::Custom,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// True for null, booleans, numbers, strings and symbols
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Symbol(_)
        )
    }

    /// Whether two values are the same reference. Primitives never are.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            (Value::Pending(a), Value::Pending(b)) => a.ptr_eq(b),
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Read a record field, if this is a record holding `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_record()
            .and_then(|record| record.read().get(key).cloned())
    }

    /// Read a list element, if this is a list long enough
    pub fn at(&self, index: usize) -> Option<Value> {
        self.as_list()
            .and_then(|list| list.read().get(index).cloned())
    }

    /// Downcast an opaque value
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Opaque(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Structural equality for primitives, lists and records; reference
/// equality for everything else. Must not be used on cyclic values.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                Arc::ptr_eq(a, b) || *a.read() == *b.read()
            }
            (Value::Record(a), Value::Record(b)) => {
                Arc::ptr_eq(a, b) || a.read().iter().eq(b.read().iter())
            }
            _ => self.ptr_eq(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Symbol(s) => fmt::Debug::fmt(s, f),
            Value::Pending(p) => match p.peek() {
                Some(resolved) => f.debug_tuple("Pending").field(resolved).finish(),
                None => f.write_str("Pending(<unresolved>)"),
            },
            Value::List(list) => f.debug_list().entries(list.read().iter()).finish(),
            Value::Record(record) => f.debug_map().entries(record.read().iter()).finish(),
            Value::Custom(custom) => write!(f, "Custom({})", custom.type_name()),
            Value::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_guard() {
        assert!(Value::Null.is_primitive());
        assert!(Value::from(1.5).is_primitive());
        assert!(Value::from("s").is_primitive());
        assert!(Value::from(Symbol::new("id")).is_primitive());
        assert!(!Value::list([]).is_primitive());
        assert!(!Value::record::<&str>([]).is_primitive());
        assert!(!Value::resolved(Value::Null).is_primitive());
        assert!(!Value::opaque(3_u8).is_primitive());
    }

    #[test]
    fn test_handles_share_contents() {
        let list = Value::list([Value::from(1)]);
        let alias = list.clone();
        alias.as_list().unwrap().write().push(Value::from(2));

        assert!(list.ptr_eq(&alias));
        assert_eq!(list.as_list().unwrap().read().len(), 2);
    }

    #[test]
    fn test_structural_equality() {
        let a = Value::record([("x", Value::from(1)), ("y", Value::list([Value::from("z")]))]);
        let b = Value::record([("x", Value::from(1)), ("y", Value::list([Value::from("z")]))]);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));

        let c = Value::record([("y", Value::list([Value::from("z")])), ("x", Value::from(1))]);
        assert_ne!(a, c, "key order is part of a record's identity");
    }

    #[test]
    fn test_symbols_compare_by_identity() {
        let s = Symbol::new("tag");
        assert_eq!(s, s.clone());
        assert_ne!(s, Symbol::new("tag"));
        assert_eq!(s.description(), "tag");
    }

    #[test]
    fn test_accessors() {
        let record = Value::record([("n", Value::from(2.0)), ("s", Value::from("hi"))]);
        assert_eq!(record.get("n").and_then(|v| v.as_f64()), Some(2.0));
        assert_eq!(record.get("s").as_ref().and_then(Value::as_str), Some("hi"));
        assert!(record.get("missing").is_none());

        let list = Value::list([Value::Bool(true)]);
        assert_eq!(list.at(0), Some(Value::Bool(true)));
        assert_eq!(list.at(1), None);

        assert_eq!(Value::opaque(7_u16).downcast_ref::<u16>(), Some(&7));
        assert_eq!(list.kind().to_string(), "list");
    }

    #[tokio::test]
    async fn test_pending_is_shared() {
        let pending = Value::resolved(Value::from(5));
        let alias = pending.clone();
        assert!(pending.ptr_eq(&alias));

        let Value::Pending(fut) = alias else {
            panic!("expected a pending value");
        };
        assert_eq!(fut.await, Value::from(5));
    }
}
