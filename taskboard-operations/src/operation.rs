//! Operation metadata and execution traits

use crate::ExecutionResult;
use serde_json::Value;

/// Static description of an operation
pub trait Operation {
    /// The action, e.g. "move"
    fn verb(&self) -> &'static str;

    /// The entity acted on, e.g. "card"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical "verb noun" string used in log entries
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context `C`, failing with `E`
pub trait Execute<C, E> {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Touch;

    impl Operation for Touch {
        fn verb(&self) -> &'static str {
            "touch"
        }
        fn noun(&self) -> &'static str {
            "counter"
        }
        fn description(&self) -> &'static str {
            "Bump a counter"
        }
    }

    impl Execute<u32, String> for Touch {
        fn execute(&self, ctx: &mut u32) -> ExecutionResult<Value, String> {
            *ctx += 1;
            ExecutionResult::Unlogged {
                value: Value::from(*ctx),
            }
        }
    }

    #[test]
    fn test_op_string() {
        assert_eq!(Touch.op_string(), "touch counter");
    }

    #[test]
    fn test_execute_mutates_context() {
        let mut counter = 0u32;
        let value = Touch.execute(&mut counter).into_result().unwrap();
        assert_eq!(counter, 1);
        assert_eq!(value, Value::from(1));
    }
}
