use std::fmt;

/// The indexing operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Set,
    InsertAt,
    RemoveAt,
    Exchange,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::InsertAt => "insert_at",
            Operation::RemoveAt => "remove_at",
            Operation::Exchange => "exchange",
        };
        f.write_str(name)
    }
}

/// An index fell outside the range an operation accepts.
///
/// `get`, `set`, `remove_at` and `exchange` accept `0..len`; `insert_at`
/// accepts `0..=len`. The collection is never modified by a call that fails
/// with this error.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{operation}: index {index} is out of range for length {len}")]
pub struct IndexOutOfRange {
    pub operation: Operation,
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    pub(crate) fn new(operation: Operation, index: usize, len: usize) -> Self {
        let err = Self { operation, index, len };
        tracing::debug!(%operation, index, len, "rejected index");
        err
    }
}
