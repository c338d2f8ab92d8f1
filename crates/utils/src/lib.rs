//! Async lifting, debouncing and deep cloning for fnkit
//!
//! This crate builds on `fnkit-core`: the composition primitives live there
//! and are re-exported here so most callers need a single dependency.

pub mod async_runtime;
pub mod cloning;
pub mod config;
pub mod debounce;
pub mod tracing;

pub use async_runtime::{bind_p, bind_p_async, bind_p_with, current_runtime, is_in_async_context};
pub use cloning::{deep_clone, deep_clone_with, CloneConfig, DeepCloner, OpaquePolicy};
pub use config::FnkitConfig;
pub use debounce::{debounce, DebounceConfig, Debouncer, TimerHandle};

pub use fnkit_core::functional::prelude::*;
pub use fnkit_core::{Error, Result, Value};
