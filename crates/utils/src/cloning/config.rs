//! Configuration for deep cloning

use fnkit_core::{Error, Result, DEFAULT_CLONE_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with a value the cloner cannot copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpaquePolicy {
    /// Log a warning and copy the reference
    #[default]
    WarnAndShare,
    /// Return an `Uncloneable` error
    Fail,
}

impl FromStr for OpaquePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" | "share" | "warn_and_share" => Ok(OpaquePolicy::WarnAndShare),
            "fail" | "error" => Ok(OpaquePolicy::Fail),
            other => Err(Error::configuration(format!(
                "unknown opaque value policy '{other}', expected 'warn' or 'fail'"
            ))),
        }
    }
}

impl fmt::Display for OpaquePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpaquePolicy::WarnAndShare => f.write_str("warn"),
            OpaquePolicy::Fail => f.write_str("fail"),
        }
    }
}

/// Knobs for [`deep_clone_with`](super::deep_clone_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloneConfig {
    pub on_opaque: OpaquePolicy,
    /// Deepest nesting level that will be entered
    pub max_depth: usize,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            on_opaque: OpaquePolicy::default(),
            max_depth: DEFAULT_CLONE_MAX_DEPTH,
        }
    }
}

impl CloneConfig {
    /// Refuse opaque values instead of sharing them
    pub fn strict() -> Self {
        Self {
            on_opaque: OpaquePolicy::Fail,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_on_opaque(mut self, policy: OpaquePolicy) -> Self {
        self.on_opaque = policy;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::configuration("clone max_depth must be at least 1"));
        }
        Ok(())
    }
}
