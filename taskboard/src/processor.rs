//! Operation processor with an in-memory activity log

use crate::error::BoardError;
use crate::store::BoardStore;
use serde_json::Value;
use std::collections::VecDeque;
use taskboard_operations::{Execute, LogEntry, Operation, OperationProcessor};

/// How many entries the activity log keeps before dropping the oldest
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 256;

/// Outcome of running one operation
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub value: Value,
    /// True when the board changed (and so needs rendering and saving)
    pub mutated: bool,
}

/// Runs board operations, stamps log entries with the actor and keeps the
/// most recent ones. The activity log lives for the session only.
#[derive(Debug)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
    activity: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for BoardOperationProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self {
            actor: None,
            activity: VecDeque::new(),
            capacity: DEFAULT_ACTIVITY_CAPACITY,
        }
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
            ..Self::new()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Logged operations, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    pub fn activity_len(&self) -> usize {
        self.activity.len()
    }

    /// Execute `operation`, record its log entry and report whether the
    /// board changed.
    pub fn run<O>(&mut self, operation: &O, store: &mut BoardStore) -> Result<Processed, BoardError>
    where
        O: Operation + Execute<BoardStore, BoardError>,
    {
        let result = operation.execute(store);
        let mutated = result.is_mutation();
        let (value, log_entry) = result.split();

        if let Some(entry) = log_entry {
            self.record(entry);
        }

        match &value {
            Ok(_) if mutated => {
                tracing::info!(op = %operation.op_string(), "board updated");
            }
            Ok(_) => {
                tracing::debug!(op = %operation.op_string(), "operation left board unchanged");
            }
            Err(error) => {
                tracing::debug!(op = %operation.op_string(), %error, "operation failed");
            }
        }

        value.map(|value| Processed { value, mutated })
    }

    fn record(&mut self, entry: LogEntry) {
        let entry = match &self.actor {
            Some(actor) => entry.with_actor(actor.clone()),
            None => entry,
        };
        self.activity.push_front(entry);
        self.activity.truncate(self.capacity);
    }
}

impl OperationProcessor<BoardStore, BoardError> for BoardOperationProcessor {
    fn process<O>(&mut self, operation: &O, store: &mut BoardStore) -> Result<Value, BoardError>
    where
        O: Operation + Execute<BoardStore, BoardError>,
    {
        self.run(operation, store).map(|processed| processed.value)
    }
}
