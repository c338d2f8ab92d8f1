//! Core building blocks for `fnkit`.
//!
//! ## Key Components
//!
//! - **`functional`**: composition (`pipe!`, `try_pipe!`, `Pipeline`,
//!   `Chain`) and small operators such as `identity` and `zip`.
//! - **`errors`**: the crate-wide `Error` enum and `Result` alias.
//! - **`value`**: the dynamic `Value` graph that deep cloning works on, and
//!   the `Cloneable` capability trait.
//! - **`types`**: shared aliases (`Pojo`, `JsonObject`, `Reducer`, ...).
//! - **`constants`**: environment variable names and defaults.

pub mod constants;
pub mod errors;
pub mod functional;
pub mod types;
pub mod value;

#[cfg(test)]
mod testing;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    functional::{identity, empty_fn, echo, zip, Chain, Pipeline},
    types::{Dispatch, JsonObject, Pojo, Reducer, ReducerAction},
    value::{Cloneable, Cloner, Symbol, Value, ValueKind},
};
