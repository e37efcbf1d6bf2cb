//! Severity-band routing between the two output streams.
//!
//! # Data Flow
//! ```text
//! record severity
//!     → high_priority (>= error)            → stderr
//!     → low_priority  (< error, >= threshold) → stdout
//!     → neither                              → dropped
//! ```
//!
//! # Design Decisions
//! - Error is the fixed boundary between the bands, so the predicates are
//!   mutually exclusive and a record reaches at most one stream
//! - Decisions are a pure function of (severity, threshold)
//! - The stderr band ignores the threshold entirely
//!
//! A threshold above error leaves the stdout band empty. That is intended:
//! the threshold only gates the low band.

use std::fmt;

use crate::level::Severity;

/// Boundary between the stdout and stderr bands.
pub const BAND_BOUNDARY: Severity = Severity::Error;

/// A process output stream a record can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub fn as_str(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records bound for the error stream.
pub fn high_priority(severity: Severity) -> bool {
    severity >= BAND_BOUNDARY
}

/// Records bound for the standard output stream.
pub fn low_priority(severity: Severity, threshold: Severity) -> bool {
    severity < BAND_BOUNDARY && severity >= threshold
}

/// Where a record of `severity` goes under `threshold`, if anywhere.
pub fn destination(severity: Severity, threshold: Severity) -> Option<Stream> {
    if high_priority(severity) {
        Some(Stream::Stderr)
    } else if low_priority(severity, threshold) {
        Some(Stream::Stdout)
    } else {
        None
    }
}
