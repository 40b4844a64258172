//! Comparison functions.
//!
//! Each function builds a [`Predicate`] from two expression operands. Kind
//! compatibility is checked at evaluation time: operands must unify (same
//! kind, or both within the numeric family) or the comparison is an
//! `Incomparable` error. A NULL operand makes the comparison no-match.

use super::{CmpOp, Expr, Predicate};
use crate::value::Value;

#[inline]
fn compare(op: CmpOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Predicate {
    Predicate::Compare {
        op,
        lhs: lhs.into(),
        rhs: rhs.into(),
    }
}

/// Equality comparison.
///
/// ```ignore
/// eq(field("integer"), val(2))
/// eq(field("integer2"), field("integer"))
/// ```
pub fn eq(left: impl Into<Expr>, right: impl Into<Expr>) -> Predicate {
    compare(CmpOp::Eq, left, right)
}

/// Inequality comparison.
pub fn neq(left: impl Into<Expr>, right: impl Into<Expr>) -> Predicate {
    compare(CmpOp::Ne, left, right)
}

/// Greater-than comparison.
pub fn gt(left: impl Into<Expr>, right: impl Into<Expr>) -> Predicate {
    compare(CmpOp::Gt, left, right)
}

/// Greater-than-or-equal comparison.
pub fn gte(left: impl Into<Expr>, right: impl Into<Expr>) -> Predicate {
    compare(CmpOp::Gte, left, right)
}

/// Less-than comparison.
pub fn lt(left: impl Into<Expr>, right: impl Into<Expr>) -> Predicate {
    compare(CmpOp::Lt, left, right)
}

/// Less-than-or-equal comparison.
pub fn lte(left: impl Into<Expr>, right: impl Into<Expr>) -> Predicate {
    compare(CmpOp::Lte, left, right)
}

/// Membership in a set of literal values.
///
/// NULL values in the set never match (and a NULL subject matches nothing).
///
/// ```ignore
/// in_values(field("string"), ["1", "2"])
/// ```
pub fn in_values<I, T>(expr: impl Into<Expr>, values: I) -> Predicate
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Predicate::In {
        expr: expr.into(),
        set: values.into_iter().map(Into::into).collect(),
    }
}
