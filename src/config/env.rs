//! Environment overlay.

use std::env;

use crate::config::schema::LoggerConfig;
use crate::level::Severity;

/// Environment variable holding the level threshold.
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Threshold from `LOG_LEVEL`; absent, non-unicode and unrecognized values
/// all yield the fallback.
pub fn level_from_env() -> Severity {
    Severity::from_config(env::var(LEVEL_ENV_VAR).ok().as_deref())
}

/// Override the configured level if `LOG_LEVEL` is set at all.
pub fn apply_env(config: &mut LoggerConfig) {
    if env::var_os(LEVEL_ENV_VAR).is_some() {
        config.level = level_from_env();
    }
}
