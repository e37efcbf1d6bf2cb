//! Structured key/value fields attached to a record.

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

/// Fields rendered as a compact JSON object after the message.
///
/// Keys are kept sorted; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a duration, encoded as floating-point seconds.
    pub fn duration(self, key: impl Into<String>, value: Duration) -> Self {
        self.with(key, value.as_secs_f64())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) {
        // Values that cannot be represented as JSON still get logged.
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("<unserializable: {}>", e)));
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON, or an empty string when there are no fields.
    pub fn to_json(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        Value::Object(self.0.clone()).to_string()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Build [`Fields`] from `key => value` pairs.
///
/// ```
/// let fields = splitlog::fields! { "user" => "ann", "attempt" => 3 };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::Fields::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Fields::new()$(.with($key, $value))+
    };
}
