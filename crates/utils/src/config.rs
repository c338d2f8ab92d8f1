//! Aggregate configuration with environment overrides

use crate::cloning::{CloneConfig, OpaquePolicy};
use crate::debounce::DebounceConfig;
use fnkit_core::{
    Error, Result, ResultExt, FNKIT_CLONE_MAX_DEPTH_VAR, FNKIT_CLONE_ON_OPAQUE_VAR,
    FNKIT_DEBOUNCE_DELAY_MS_VAR, FNKIT_DEBOUNCE_IMMEDIATE_VAR,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Every tunable in fnkit-utils
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FnkitConfig {
    pub debounce: DebounceConfig,
    pub cloning: CloneConfig,
}

impl FnkitConfig {
    /// Parse from JSON; missing sections and fields take their defaults
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `FNKIT_*` environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(FNKIT_DEBOUNCE_DELAY_MS_VAR) {
            let millis: u64 = raw.trim().parse().context(FNKIT_DEBOUNCE_DELAY_MS_VAR)?;
            self.debounce.delay = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(FNKIT_DEBOUNCE_IMMEDIATE_VAR) {
            self.debounce.immediate = parse_flag(&raw).context(FNKIT_DEBOUNCE_IMMEDIATE_VAR)?;
        }
        if let Some(raw) = lookup(FNKIT_CLONE_ON_OPAQUE_VAR) {
            self.cloning.on_opaque = raw
                .parse::<OpaquePolicy>()
                .context(FNKIT_CLONE_ON_OPAQUE_VAR)?;
        }
        if let Some(raw) = lookup(FNKIT_CLONE_MAX_DEPTH_VAR) {
            self.cloning.max_depth = raw
                .trim()
                .parse::<usize>()
                .context(FNKIT_CLONE_MAX_DEPTH_VAR)?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        self.debounce.validate()?;
        self.cloning.validate()
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!("'{other}' is not a boolean flag"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_json_with_partial_sections() {
        let config =
            FnkitConfig::from_json_str(r#"{"debounce": {"immediate": true}}"#).unwrap();
        assert!(config.debounce.immediate);
        assert_eq!(config.debounce.delay, fnkit_core::DEFAULT_DEBOUNCE_DELAY);
        assert_eq!(config.cloning, CloneConfig::default());
    }

    #[test]
    fn test_json_is_validated() {
        let err = FnkitConfig::from_json_str(r#"{"cloning": {"max_depth": 0}}"#).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(matches!(
            FnkitConfig::from_json_str("{not json"),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = FnkitConfig::default();
        config
            .apply_overrides(lookup(&[
                (FNKIT_DEBOUNCE_DELAY_MS_VAR, "40"),
                (FNKIT_DEBOUNCE_IMMEDIATE_VAR, "yes"),
                (FNKIT_CLONE_ON_OPAQUE_VAR, "fail"),
                (FNKIT_CLONE_MAX_DEPTH_VAR, " 16 "),
            ]))
            .unwrap();

        assert_eq!(config.debounce.delay, Duration::from_millis(40));
        assert!(config.debounce.immediate);
        assert_eq!(config.cloning.on_opaque, OpaquePolicy::Fail);
        assert_eq!(config.cloning.max_depth, 16);
    }

    #[test]
    fn test_malformed_overrides_name_the_variable() {
        let mut config = FnkitConfig::default();
        let err = config
            .apply_overrides(lookup(&[(FNKIT_DEBOUNCE_DELAY_MS_VAR, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(FNKIT_DEBOUNCE_DELAY_MS_VAR));

        let err = config
            .apply_overrides(lookup(&[(FNKIT_DEBOUNCE_IMMEDIATE_VAR, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("not a boolean flag"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(FNKIT_DEBOUNCE_DELAY_MS_VAR, "15");
        std::env::set_var(FNKIT_CLONE_ON_OPAQUE_VAR, "warn");
        let config = FnkitConfig::from_env();
        std::env::remove_var(FNKIT_DEBOUNCE_DELAY_MS_VAR);
        std::env::remove_var(FNKIT_CLONE_ON_OPAQUE_VAR);

        let config = config.unwrap();
        assert_eq!(config.debounce.delay, Duration::from_millis(15));
        assert_eq!(config.cloning.on_opaque, OpaquePolicy::WarnAndShare);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_delay() {
        std::env::set_var(FNKIT_DEBOUNCE_DELAY_MS_VAR, "0");
        let result = FnkitConfig::from_env();
        std::env::remove_var(FNKIT_DEBOUNCE_DELAY_MS_VAR);

        assert!(result.is_err());
    }
}
