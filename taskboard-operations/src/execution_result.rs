//! What an operation hands back to the processor

use crate::LogEntry;

/// Outcome of one operation.
///
/// Only `Logged` means the board changed. A no-op mutation (dropping a card
/// on the list it is already in) comes back as `Unlogged`, like a read.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    /// The board is untouched
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// The value, if the operation succeeded
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Logged { value, .. } | Self::Unlogged { value } => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// The entry destined for the activity log
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Logged { log_entry, .. } => Some(log_entry),
            Self::Failed { log_entry, .. } => log_entry.as_ref(),
            Self::Unlogged { .. } => None,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }

    pub fn should_log(&self) -> bool {
        self.log_entry().is_some()
    }

    /// Separate the outcome from its log entry
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.split().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_between_lists_is_logged_mutation() {
        let entry = LogEntry::new("move card", json!({"id": "c1"}), json!({"list": "doing"}), None, 0);
        let result: ExecutionResult<&str, String> = ExecutionResult::Logged {
            value: "doing",
            log_entry: entry,
        };

        assert!(result.is_mutation());
        assert!(result.should_log());
        assert_eq!(result.value(), Some(&"doing"));
        assert_eq!(result.log_entry().unwrap().op, "move card");
        assert_eq!(result.into_result(), Ok("doing"));
    }

    #[test]
    fn test_same_list_drop_is_unlogged() {
        let result: ExecutionResult<&str, String> = ExecutionResult::Unlogged { value: "todo" };

        assert!(!result.is_mutation());
        assert!(result.log_entry().is_none());
        let (value, entry) = result.split();
        assert_eq!(value, Ok("todo"));
        assert!(entry.is_none());
    }

    #[test]
    fn test_rejected_delete_keeps_its_entry() {
        let error = "card not found: c9".to_string();
        let entry = LogEntry::failure("delete card", json!({"id": "c9"}), &error, 0);
        let result: ExecutionResult<&str, String> = ExecutionResult::Failed {
            error,
            log_entry: Some(entry),
        };

        assert!(!result.is_mutation());
        assert!(result.should_log());
        assert!(result.value().is_none());
        let (value, entry) = result.split();
        assert_eq!(value, Err("card not found: c9".to_string()));
        assert!(entry.unwrap().is_error());
    }

    #[test]
    fn test_failure_without_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Failed {
            error: "no such card".into(),
            log_entry: None,
        };
        assert!(!result.should_log());
    }
}
