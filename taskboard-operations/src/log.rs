//! Activity log rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// One row of the activity log: which operation ran, with what, and how it
/// ended. Failed operations carry `{"error": "<message>"}` as their output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ULID, so entries sort by creation time
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// "verb noun", e.g. "move card"
    pub op: String,
    pub input: Value,
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub duration_ms: u64,
}

impl LogEntry {
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Entry for an operation that was rejected with `error`
    pub fn failure(
        op: impl Into<String>,
        input: Value,
        error: &impl fmt::Display,
        duration_ms: u64,
    ) -> Self {
        Self::new(op, input, json!({ "error": error.to_string() }), None, duration_ms)
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// The rejection message, if this entry records a failure
    pub fn error_message(&self) -> Option<&str> {
        self.output.get("error").and_then(Value::as_str)
    }

    pub fn is_error(&self) -> bool {
        self.error_message().is_some()
    }
}
