//! Homogeneous composition for stage lists built at runtime

use crate::errors::{Error, Result};
use std::fmt;

/// A boxed `T -> T` stage
pub type Stage<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// An ordered, non-empty list of `T -> T` stages applied left to right.
///
/// Use this when the number of stages is only known at runtime; for a fixed
/// list with differing types use `pipe!`.
pub struct Chain<T> {
    stages: Vec<Stage<T>>,
}

impl<T> Chain<T> {
    /// Build a chain from a list of stages. An empty list is a usage error.
    pub fn new(stages: Vec<Stage<T>>) -> Result<Self> {
        if stages.is_empty() {
            return Err(Error::usage(
                "Chain::new",
                "at least one stage is required",
            ));
        }
        Ok(Self { stages })
    }

    /// Build a chain from its first stage
    pub fn from_stage<F>(f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self {
            stages: vec![Box::new(f)],
        }
    }

    /// Append a stage
    pub fn push<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Box::new(f));
        self
    }

    /// Append a stage, builder style
    #[must_use]
    pub fn then<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.push(f);
        self
    }

    /// Feed `input` to the first stage and fold the rest over its output
    pub fn apply(&self, input: T) -> T {
        match self.stages.split_first() {
            Some((first, rest)) => {
                let seed = first(input);
                rest.iter().fold(seed, |acc, stage| stage(acc))
            }
            None => input,
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; kept for parity with `len`
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_is_rejected() {
        let err = Chain::<i32>::new(Vec::new()).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("at least one stage"));
    }

    #[test]
    fn test_chain_applies_in_order() {
        let stages: Vec<Stage<String>> = vec![
            Box::new(|s: String| s + "a"),
            Box::new(|s: String| s + "b"),
            Box::new(|s: String| s.to_uppercase()),
        ];
        let chain = Chain::new(stages).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.apply(String::from(">")), ">AB");
    }

    #[test]
    fn test_single_stage_chain_matches_stage() {
        let chain = Chain::from_stage(|x: i64| x * x);
        assert!(!chain.is_empty());
        assert_eq!(chain.apply(-7), 49);
    }

    #[test]
    fn test_push_and_then() {
        let mut chain = Chain::from_stage(|x: i32| x + 1);
        chain.push(|x| x * 10);
        let chain = chain.then(|x| x - 1);
        assert_eq!(chain.apply(0), 9);
        assert_eq!(format!("{chain:?}"), "Chain { stages: 3 }");
    }
}
