/// Constants used throughout the fnkit workspace
use std::time::Duration;

// Environment variable names
pub const FNKIT_DEBOUNCE_DELAY_MS_VAR: &str = "FNKIT_DEBOUNCE_DELAY_MS";
pub const FNKIT_DEBOUNCE_IMMEDIATE_VAR: &str = "FNKIT_DEBOUNCE_IMMEDIATE";
pub const FNKIT_CLONE_ON_OPAQUE_VAR: &str = "FNKIT_CLONE_ON_OPAQUE";
pub const FNKIT_CLONE_MAX_DEPTH_VAR: &str = "FNKIT_CLONE_MAX_DEPTH";

// Debounce defaults
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

// Clone defaults
pub const DEFAULT_CLONE_MAX_DEPTH: usize = 512;

// Root segment used in value paths reported by errors
pub const VALUE_PATH_ROOT: &str = "$";
