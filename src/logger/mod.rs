//! The shared logger handle.
//!
//! # Data Flow
//! ```text
//! Logger::{debug..fatal}, tracing macros
//!     → tracing::Dispatch (Registry)
//!         ├─ stderr layer  [high_priority]   → ConsoleFormat → StderrSink
//!         └─ stdout layer  [low_priority]    → ConsoleFormat → StdoutSink
//! ```
//!
//! # Design Decisions
//! - Each `Logger` owns its own `Dispatch`; installing it globally is a
//!   separate step (see `global.rs`), so handles can be built and tested
//!   without touching process state
//! - The seven severities ride on `tracing` events as a `splitlog.severity` field;
//!   band filtering works on the event level alone because error is the
//!   band boundary
//! - Emission methods are `#[track_caller]` so the caller column names the
//!   call site rather than this module

pub mod fields;
pub mod format;
pub mod global;
pub mod sink;

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::panic::Location;
use std::process;
use std::sync::Arc;

use tracing::{Dispatch, Level};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

use crate::config::LoggerConfig;
use crate::level::Severity;
use crate::routing;

use self::fields::Fields;
use self::format::{short_caller, ConsoleFormat};
use self::sink::{Flush, Sink, StderrSink, StdoutSink};

/// Structured logger writing to a stdout band and a stderr band.
pub struct Logger {
    dispatch: Dispatch,
    config: LoggerConfig,
    sinks: [Arc<dyn Flush>; 2],
}

impl Logger {
    /// Build a logger over the process streams.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sinks(config, StdoutSink, StderrSink)
    }

    /// Build a logger over arbitrary destinations for the two bands.
    pub fn with_sinks<O, E>(config: LoggerConfig, stdout: O, stderr: E) -> Self
    where
        O: Sink,
        E: Sink,
    {
        let threshold = config.level;
        let format = ConsoleFormat::new(config.name.clone());

        let stderr_layer = tracing_subscriber::fmt::layer()
            .event_format(format.clone())
            .with_writer(stderr.clone())
            .with_filter(filter_fn(|meta| routing::high_priority(Severity::from(*meta.level()))));
        let stdout_layer = tracing_subscriber::fmt::layer()
            .event_format(format)
            .with_writer(stdout.clone())
            .with_filter(filter_fn(move |meta| {
                routing::low_priority(Severity::from(*meta.level()), threshold)
            }));

        let subscriber = tracing_subscriber::registry()
            .with(stderr_layer)
            .with(stdout_layer);

        Self {
            dispatch: Dispatch::new(subscriber),
            config,
            sinks: [Arc::new(stdout), Arc::new(stderr)],
        }
    }

    pub fn threshold(&self) -> Severity {
        self.config.level
    }

    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub(crate) fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Whether a record of `severity` would reach either stream.
    pub fn enabled(&self, severity: Severity) -> bool {
        routing::destination(severity, self.config.level).is_some()
    }

    /// Run `f` with this logger as the thread's default subscriber, so plain
    /// `tracing` macros inside it are routed here.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Flush both destinations.
    pub fn sync(&self) -> io::Result<()> {
        let mut result = Ok(());
        for sink in &self.sinks {
            if let Err(e) = sink.flush_sink() {
                result = result.and(Err(e));
            }
        }
        result
    }

    /// Emit a record with fields. Panic and fatal records terminate after
    /// being written; dpanic does so in development mode.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display, fields: &Fields) {
        self.write(severity, &message, Location::caller(), fields);
        self.escalate(severity, &message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message, &Fields::new());
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message, &Fields::new());
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warn, message, &Fields::new());
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message, &Fields::new());
    }

    #[track_caller]
    pub fn debug_with(&self, message: impl fmt::Display, fields: &Fields) {
        self.log(Severity::Debug, message, fields);
    }

    #[track_caller]
    pub fn info_with(&self, message: impl fmt::Display, fields: &Fields) {
        self.log(Severity::Info, message, fields);
    }

    #[track_caller]
    pub fn warn_with(&self, message: impl fmt::Display, fields: &Fields) {
        self.log(Severity::Warn, message, fields);
    }

    #[track_caller]
    pub fn error_with(&self, message: impl fmt::Display, fields: &Fields) {
        self.log(Severity::Error, message, fields);
    }

    /// Log at dpanic; panics afterwards only in development mode.
    #[track_caller]
    pub fn dpanic(&self, message: impl fmt::Display) {
        self.log(Severity::DPanic, message, &Fields::new());
    }

    /// Log at panic, flush, then panic with the message.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.write(Severity::Panic, &message, Location::caller(), &Fields::new());
        self.terminate(Severity::Panic, &message)
    }

    /// Log at fatal, flush, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.write(Severity::Fatal, &message, Location::caller(), &Fields::new());
        self.terminate(Severity::Fatal, &message)
    }

    /// The self-test record written once a logger is initialized.
    pub(crate) fn announce(&self) {
        self.info(format_args!(
            "successfully initiated logging, level = {}",
            self.config.level
        ));
        let _ = self.sync();
    }

    fn write(
        &self,
        severity: Severity,
        message: &dyn fmt::Display,
        caller: &Location<'_>,
        fields: &Fields,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let caller = short_caller(caller.file(), Some(caller.line()));
        let fields = fields.to_json();
        let stacktrace = if self.config.stacktrace && severity.wants_stacktrace() {
            Backtrace::force_capture().to_string()
        } else {
            String::new()
        };
        let severity_name = severity.as_str();

        macro_rules! emit {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    splitlog.severity = severity_name,
                    splitlog.caller = caller.as_str(),
                    splitlog.fields = fields.as_str(),
                    splitlog.stacktrace = stacktrace.as_str(),
                    "{}",
                    message
                )
            };
        }

        self.in_scope(|| match severity {
            Severity::Debug => emit!(Level::DEBUG),
            Severity::Info => emit!(Level::INFO),
            Severity::Warn => emit!(Level::WARN),
            Severity::Error | Severity::DPanic | Severity::Panic | Severity::Fatal => {
                emit!(Level::ERROR)
            }
        });
    }

    #[track_caller]
    fn escalate(&self, severity: Severity, message: &dyn fmt::Display) {
        match severity {
            Severity::DPanic if self.config.development => self.terminate(severity, message),
            Severity::Panic | Severity::Fatal => self.terminate(severity, message),
            _ => {}
        }
    }

    #[track_caller]
    fn terminate(&self, severity: Severity, message: &dyn fmt::Display) -> ! {
        let _ = self.sync();
        if severity == Severity::Fatal {
            process::exit(1);
        }
        panic!("{}", message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
