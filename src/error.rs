use compact_str::CompactString;
use thiserror::Error;

use crate::value::ValueKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowcaseError {
    /// Result kinds cannot be reconciled into one output kind
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    /// A condition or result referenced a field the record does not declare
    #[error("unknown field: {0}")]
    UnknownField(CompactString),

    /// A dotted path named a relation the record does not declare
    #[error("unknown relation: {0}")]
    UnknownRelation(CompactString),

    /// Values of these kinds cannot be ordered against each other
    #[error("cannot compare {0} with {1}")]
    Incomparable(ValueKind, ValueKind),

    /// Arithmetic on a value outside the numeric family
    #[error("invalid operand for {op}: {kind}")]
    InvalidOperand { op: &'static str, kind: ValueKind },

    /// Numeric result does not fit the operand kind
    #[error("numeric overflow in {0}")]
    Overflow(&'static str),

    /// A field path with more than one relation hop or an empty segment
    #[error("invalid field path: {0}")]
    InvalidPath(CompactString),
}

/// Result type for expression construction and evaluation
pub type Result<T> = core::result::Result<T, RowcaseError>;
