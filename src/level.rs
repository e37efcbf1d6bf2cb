//! Severity levels.
//!
//! # Responsibilities
//! - Define the seven ordered severities (debug through fatal)
//! - Parse level names and numeric codes from configuration
//! - Map severities onto the five `tracing` levels and back
//!
//! # Design Decisions
//! - Parsing never fails: unrecognized input becomes `Severity::Error`
//! - Ordering is by rank, so `Severity::Debug < Severity::Fatal`

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use tracing::Level;

/// Ordered severity of a log record, most verbose first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    #[default]
    Error,
    DPanic,
    Panic,
    Fatal,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 7] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::DPanic,
        Severity::Panic,
        Severity::Fatal,
    ];

    /// Threshold used when the configured value is absent or unrecognized.
    pub const FALLBACK: Severity = Severity::Error;

    /// Look up a level name or numeric code, case-insensitively.
    ///
    /// Returns `None` for anything outside the recognized table.
    pub fn parse(value: &str) -> Option<Severity> {
        match value.to_uppercase().as_str() {
            "0" | "INFO" => Some(Severity::Info),
            "1" | "WARN" => Some(Severity::Warn),
            "2" | "ERROR" => Some(Severity::Error),
            "3" | "DPANIC" => Some(Severity::DPanic),
            "4" | "PANIC" => Some(Severity::Panic),
            "5" | "FATAL" => Some(Severity::Fatal),
            "9" | "DEBUG" => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Resolve an optional configuration value to a threshold.
    ///
    /// Absent and unrecognized values fall back to [`Severity::FALLBACK`].
    pub fn from_config(value: Option<&str>) -> Severity {
        value.and_then(Severity::parse).unwrap_or(Severity::FALLBACK)
    }

    /// Numeric configuration code for this severity.
    pub fn code(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
            Severity::DPanic => 3,
            Severity::Panic => 4,
            Severity::Fatal => 5,
            Severity::Debug => 9,
        }
    }

    /// Lowercase name, as written in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::DPanic => "dpanic",
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
        }
    }

    /// The `tracing` level events of this severity are emitted at.
    pub fn tracing_level(self) -> Level {
        match self {
            Severity::Debug => Level::DEBUG,
            Severity::Info => Level::INFO,
            Severity::Warn => Level::WARN,
            Severity::Error | Severity::DPanic | Severity::Panic | Severity::Fatal => Level::ERROR,
        }
    }

    /// Whether records of this severity carry a stack trace.
    pub fn wants_stacktrace(self) -> bool {
        self >= Severity::DPanic
    }
}

impl From<Level> for Severity {
    /// `TRACE` has no counterpart and counts as debug.
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE | Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = std::convert::Infallible;

    /// Lenient: unrecognized input yields the fallback threshold.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from_config(Some(s)))
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

struct SeverityVisitor;

impl<'de> Visitor<'de> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level name or numeric level code")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
        Ok(Severity::from_config(Some(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Severity, E> {
        Ok(Severity::from_config(Some(&value.to_string())))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
        Ok(Severity::from_config(Some(&value.to_string())))
    }
}
