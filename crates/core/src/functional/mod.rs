//! Functional programming utilities for fnkit
//!
//! Composition in two shapes: `pipe!` for statically typed stages of any
//! arity (with [`Pipeline`] when the result has to be stored and extended),
//! and [`Chain`] for homogeneous stage lists assembled at runtime.

pub mod chain;
pub mod composition;
pub mod operators;

pub use chain::{Chain, Stage};
pub use composition::{try_forward_compose, Pipeline};
pub use operators::{echo, empty_fn, forward_compose, identity, zip};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::chain::{Chain, Stage};
    pub use super::composition::Pipeline;
    pub use super::operators::*;
    pub use crate::{pipe, try_pipe};
}
