//! Capability traits for values that copy themselves

use super::Value;
use crate::errors::Result;
use std::fmt;

/// Implemented by values that know how to produce an independent copy of
/// themselves. The deep cloner hands every [`Value::Custom`] to this trait
/// instead of inspecting it.
pub trait Cloneable: Send + Sync + fmt::Debug {
    /// Short name used in diagnostics
    fn type_name(&self) -> &'static str;

    /// Produce the copy. Children that are themselves [`Value`]s should go
    /// through `cloner` so that depth limits and cycle checks still apply.
    fn clone_value(&self, cloner: &mut dyn Cloner) -> Result<Value>;
}

/// The recursion hook a deep cloner exposes to [`Cloneable`] values
pub trait Cloner {
    /// Deep-clone `value`, reached from the current value through `segment`
    fn clone_child(&mut self, segment: &str, value: &Value) -> Result<Value>;
}
