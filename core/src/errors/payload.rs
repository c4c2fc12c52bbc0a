//! Backend error bodies

use serde_json::{Map, Value};

/// Error body returned by the REST backend on a failed request.
///
/// The backend is inconsistent about shape: a bare string, a list (normally
/// of strings), or an object keyed by field name (sometimes just `detail`).
#[derive(Debug, Clone, PartialEq)]
pub enum BackendErrorPayload {
    Message(String),
    /// Top-level list; entries are kept as sent so non-string items can be
    /// told apart from messages
    Messages(Vec<Value>),
    Fields(Map<String, Value>),
    /// Numbers, booleans and null
    Other(Value),
}

impl BackendErrorPayload {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => BackendErrorPayload::Message(text),
            Value::Array(items) => BackendErrorPayload::Messages(items),
            Value::Object(fields) => BackendErrorPayload::Fields(fields),
            other => BackendErrorPayload::Other(other),
        }
    }

    /// Parse a JSON error body
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(text).map(Self::from_value)
    }

    /// The string `detail` entry of an object payload, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendErrorPayload::Fields(fields) => fields.get("detail").and_then(Value::as_str),
            _ => None,
        }
    }

    /// True for the string, list and object shapes the mapper understands
    pub fn is_structured(&self) -> bool {
        !matches!(self, BackendErrorPayload::Other(_))
    }
}

impl From<Value> for BackendErrorPayload {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
