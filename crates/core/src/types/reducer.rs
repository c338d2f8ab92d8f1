//! Reducer and dispatch shapes for state-update callbacks

use serde::{Deserialize, Serialize};

/// A basic reducer action: a payload tagged with a string `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducerAction<T> {
    pub value: T,
    #[serde(rename = "type")]
    pub kind: String,
}

impl<T> ReducerAction<T> {
    pub fn new(kind: impl Into<String>, value: T) -> Self {
        Self {
            value,
            kind: kind.into(),
        }
    }
}

/// Computes the next state from the previous one and an action
pub type Reducer<S, A> = Box<dyn Fn(S, A) -> S + Send + Sync>;

/// Sends an action somewhere, returning nothing
pub type Dispatch<A> = Box<dyn Fn(A) + Send + Sync>;
