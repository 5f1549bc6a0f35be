//! Processor trait wrapping operation execution

use crate::{Execute, Operation};
use serde_json::Value;

/// Runs operations against a context and takes care of their log entries.
///
/// Implementations decide where log entries go and which actor they carry.
pub trait OperationProcessor<C, E> {
    fn process<O>(&mut self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Operation + Execute<C, E>;
}
