//! Level-split structured logging.
//!
//! One call at startup reads `LOG_LEVEL`, builds two pipelines and publishes
//! a shared [`Logger`]:
//!
//! - standard error receives every record at `error` or above
//! - standard output receives records below `error` that meet the threshold
//!
//! ```no_run
//! let log = splitlog::init().expect("logging already set up elsewhere");
//! log.info_with("listening", &splitlog::fields! { "port" => 8080 });
//! tracing::warn!("plain tracing macros are routed the same way");
//! ```

pub mod config;
pub mod level;
pub mod logger;
pub mod routing;

pub use config::LoggerConfig;
pub use level::Severity;
pub use logger::fields::Fields;
pub use logger::global::{global, init, init_with, LoggerError};
pub use logger::sink::{MemorySink, StderrSink, StdoutSink};
pub use logger::Logger;
pub use routing::Stream;
