//! Console line encoder.
//!
//! One record per line, tab separated:
//!
//! ```text
//! 2026-10-16T09:14:03.512+0200  warn  api  handlers/user.rs:88  slow query  {"elapsed":1.2}
//! ```
//!
//! Columns are timestamp, level, logger name (if configured), caller, message
//! and a JSON object of fields (if any). Records carrying a stack trace are
//! followed by the trace on the next lines.

use std::fmt::{self, Write as _};

use chrono::Local;
use serde_json::{Map, Number, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::level::Severity;

/// ISO-8601 with milliseconds and numeric offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Event fields the logger handle sets; everything else is a user field.
/// Kept under the `splitlog.` prefix so plain `tracing` events can use the
/// bare names freely.
pub(crate) const SEVERITY_FIELD: &str = "splitlog.severity";
pub(crate) const CALLER_FIELD: &str = "splitlog.caller";
pub(crate) const FIELDS_FIELD: &str = "splitlog.fields";
pub(crate) const STACKTRACE_FIELD: &str = "splitlog.stacktrace";

/// Shorten a source path to its last directory and file name, plus the line.
pub fn short_caller(file: &str, line: Option<u32>) -> String {
    let mut parts = file.rsplitn(3, |c: char| c == '/' || c == '\\');
    let name = parts.next().unwrap_or(file);
    let short = match parts.next() {
        Some(dir) if !dir.is_empty() => format!("{}/{}", dir, name),
        _ => name.to_owned(),
    };

    match line {
        Some(line) => format!("{}:{}", short, line),
        None => short,
    }
}

/// `FormatEvent` producing the console line format.
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormat {
    name: Option<String>,
}

impl ConsoleFormat {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut record = RecordVisitor::default();
        event.record(&mut record);

        let severity = record
            .severity
            .unwrap_or_else(|| Severity::from(*meta.level()));
        let caller = record
            .caller
            .or_else(|| meta.file().map(|file| short_caller(file, meta.line())));

        write!(writer, "{}\t{}", Local::now().format(TIMESTAMP_FORMAT), severity)?;
        if let Some(name) = &self.name {
            write!(writer, "\t{}", name)?;
        }
        if let Some(caller) = caller {
            write!(writer, "\t{}", caller)?;
        }
        write!(writer, "\t{}", record.message)?;
        if !record.fields.is_empty() {
            write!(writer, "\t{}", Value::Object(record.fields))?;
        }
        writeln!(writer)?;

        if let Some(trace) = record.stacktrace {
            writeln!(writer, "{}", trace.trim_end())?;
        }
        Ok(())
    }
}

/// Collects one event's fields into the parts of a line.
#[derive(Default)]
struct RecordVisitor {
    message: String,
    severity: Option<Severity>,
    caller: Option<String>,
    stacktrace: Option<String>,
    fields: Map<String, Value>,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_owned(), value);
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_owned(),
            SEVERITY_FIELD => self.severity = Severity::parse(value),
            CALLER_FIELD if !value.is_empty() => self.caller = Some(value.to_owned()),
            STACKTRACE_FIELD if !value.is_empty() => self.stacktrace = Some(value.to_owned()),
            CALLER_FIELD | STACKTRACE_FIELD => {}
            FIELDS_FIELD => {
                if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(value) {
                    self.fields.extend(map);
                }
            }
            _ => self.insert(field, Value::from(value)),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        let value = Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.clear();
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.insert(field, Value::from(format!("{:?}", value)));
        }
    }
}
