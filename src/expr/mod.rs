//! Expression trees: literals, field references, arithmetic, predicates and
//! CASE expressions.
//!
//! Expressions are immutable structural values. Build them with [`val`],
//! [`field`], the comparison functions in [`cmp`], the combinators in
//! [`logical`] and the [`case`]/[`case_on`] builders, then evaluate them
//! against a [`Record`](crate::record::Record).

pub mod case;
pub mod cmp;
pub mod logical;
pub mod ops;

pub use case::{CaseBuilder, CaseExpr, CaseInit, SimpleCaseBuilder, SimpleCaseInit, case, case_on};
pub use cmp::{eq, gt, gte, in_values, lt, lte, neq};
pub use logical::{and, and2, not, or, or2};

use compact_str::CompactString;

use crate::value::Value;

// =============================================================================
// Operators
// =============================================================================

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub(crate) const fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

/// Comparison operator used by [`Predicate::Compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CmpOp {
    /// Whether an ordering between two resolved values satisfies this operator.
    pub(crate) const fn matches(self, ord: core::cmp::Ordering) -> bool {
        use core::cmp::Ordering::*;
        match self {
            CmpOp::Eq => matches!(ord, Equal),
            CmpOp::Ne => !matches!(ord, Equal),
            CmpOp::Lt => matches!(ord, Less),
            CmpOp::Lte => matches!(ord, Less | Equal),
            CmpOp::Gt => matches!(ord, Greater),
            CmpOp::Gte => matches!(ord, Greater | Equal),
        }
    }
}

// =============================================================================
// Expr
// =============================================================================

/// A scalar expression resolved against one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Value),
    /// A field reference, by plain name or single-hop dotted path. The path
    /// is validated when the expression is evaluated.
    Field(CompactString),
    /// Binary arithmetic over two sub-expressions.
    Binary {
        op: ArithOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// A nested CASE expression.
    Case(Box<CaseExpr>),
}

/// A literal expression.
///
/// ```ignore
/// val(1)
/// val("other")
/// ```
pub fn val(value: impl Into<Value>) -> Expr {
    Expr::Literal(value.into())
}

/// A field reference expression.
///
/// ```ignore
/// field("integer")
/// field("fk.integer")   // one-hop relation path
/// ```
pub fn field(path: &str) -> Expr {
    Expr::Field(CompactString::from(path))
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value)
    }
}

impl From<CaseExpr> for Expr {
    fn from(case: CaseExpr) -> Self {
        Expr::Case(Box::new(case))
    }
}

// =============================================================================
// Predicate
// =============================================================================

/// A boolean predicate over one record.
///
/// A comparison involving NULL on either side is no-match rather than an
/// error, so unmatched rows fall through to later branches or the default.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Binary comparison between two expressions.
    Compare { op: CmpOp, lhs: Expr, rhs: Expr },
    /// Conjunction: true when every inner predicate matches.
    All(Vec<Predicate>),
    /// Disjunction: true when any inner predicate matches.
    Any(Vec<Predicate>),
    /// Negation.
    Not(Box<Predicate>),
    /// Membership in a literal value set.
    In { expr: Expr, set: Vec<Value> },
}
