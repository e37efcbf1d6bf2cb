//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::level::Severity;

/// Root configuration for the logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Level threshold for the stdout band (name or numeric code).
    pub level: Severity,

    /// Logger name written after the level column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Panic after writing a dpanic record.
    pub development: bool,

    /// Capture stack traces for dpanic and above.
    pub stacktrace: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::FALLBACK,
            name: None,
            development: false,
            stacktrace: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults with the threshold taken from `LOG_LEVEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.level = crate::config::env::level_from_env();
        config
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: bool) -> Self {
        self.stacktrace = stacktrace;
        self
    }
}
