//! CASE/WHEN expressions.
//!
//! Provides a typestate builder for first-match-wins conditional expressions
//! in two flavors:
//!
//! ```ignore
//! use rowcase::prelude::*;
//!
//! // Searched CASE: arbitrary predicates, first match wins
//! case()
//!     .when(gt(field("age"), val(65)), val("senior"))
//!     .when(gt(field("age"), val(18)), val("adult"))
//!     .r#else(val("minor"))?
//!
//! // Simple CASE: equality against a subject expression
//! case_on(field("integer"))
//!     .when(val(1), val("one"))
//!     .when(val(2), val("two"))
//!     .end()?   // without a default, unmatched records yield NULL
//! ```
//!
//! Both flavors share one branch representation; a finished [`CaseExpr`] is
//! immutable and carries no identity beyond its structure.

use smallvec::SmallVec;

use super::{Expr, Predicate};
use crate::error::{Result, RowcaseError};
use crate::value::{ValueKind, unify_kinds};

// =============================================================================
// Structure
// =============================================================================

/// A branch condition: equality against the subject (simple flavor) or an
/// arbitrary predicate (searched flavor).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BranchCondition {
    Matches(Expr),
    When(Predicate),
}

/// One (condition, result) pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Branch {
    pub(crate) condition: BranchCondition,
    pub(crate) result: Expr,
}

/// A finished CASE expression: an ordered branch list, an optional default
/// and an optional output kind.
///
/// Branch order is significant — evaluation is first-match-wins and stops at
/// the first matching branch. Without a default, unmatched records yield NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub(crate) subject: Option<Expr>,
    pub(crate) branches: SmallVec<[Branch; 4]>,
    pub(crate) default: Option<Expr>,
    pub(crate) output: Option<ValueKind>,
}

impl CaseExpr {
    /// The declared or unified output kind, if one is known statically.
    pub fn output(&self) -> Option<ValueKind> {
        self.output
    }

    /// Number of branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Start building a searched CASE expression.
///
/// Returns a [`CaseInit`] which requires at least one `.when()` call before
/// it can be finished with `.end()` or `.r#else()`.
pub fn case() -> CaseInit {
    CaseInit { _private: () }
}

/// Start building a simple CASE expression over a subject.
///
/// The subject may itself be derived, e.g. `case_on(field("integer") - val(2))`.
/// Each `.when(value, result)` compares the subject to `value` by equality.
pub fn case_on(subject: impl Into<Expr>) -> SimpleCaseInit {
    SimpleCaseInit {
        subject: subject.into(),
    }
}

// =============================================================================
// Searched builder
// =============================================================================

/// Builder state before the first WHEN branch of a searched CASE.
pub struct CaseInit {
    _private: (),
}

impl CaseInit {
    /// Add the first WHEN branch.
    pub fn when(self, condition: Predicate, result: impl Into<Expr>) -> CaseBuilder {
        let mut branches = SmallVec::new();
        branches.push(Branch {
            condition: BranchCondition::When(condition),
            result: result.into(),
        });
        CaseBuilder {
            branches,
            output: None,
        }
    }
}

/// Builder state after at least one WHEN branch of a searched CASE.
pub struct CaseBuilder {
    branches: SmallVec<[Branch; 4]>,
    output: Option<ValueKind>,
}

impl CaseBuilder {
    /// Add another WHEN branch. Declaration order is evaluation order.
    pub fn when(mut self, condition: Predicate, result: impl Into<Expr>) -> Self {
        self.branches.push(Branch {
            condition: BranchCondition::When(condition),
            result: result.into(),
        });
        self
    }

    /// Declare the output kind all results must coerce to.
    pub fn output(mut self, kind: ValueKind) -> Self {
        self.output = Some(kind);
        self
    }

    /// Finish without a default. Unmatched records yield NULL.
    pub fn end(self) -> Result<CaseExpr> {
        finish(None, self.branches, None, self.output)
    }

    /// Finish with a default for unmatched records.
    pub fn r#else(self, default: impl Into<Expr>) -> Result<CaseExpr> {
        finish(None, self.branches, Some(default.into()), self.output)
    }
}

// =============================================================================
// Simple builder
// =============================================================================

/// Builder state before the first WHEN branch of a simple CASE.
pub struct SimpleCaseInit {
    subject: Expr,
}

impl SimpleCaseInit {
    /// Add the first WHEN branch. `matches` is compared to the subject by
    /// equality; it may be any expression, not just a literal.
    pub fn when(self, matches: impl Into<Expr>, result: impl Into<Expr>) -> SimpleCaseBuilder {
        let mut branches = SmallVec::new();
        branches.push(Branch {
            condition: BranchCondition::Matches(matches.into()),
            result: result.into(),
        });
        SimpleCaseBuilder {
            subject: self.subject,
            branches,
            output: None,
        }
    }
}

/// Builder state after at least one WHEN branch of a simple CASE.
pub struct SimpleCaseBuilder {
    subject: Expr,
    branches: SmallVec<[Branch; 4]>,
    output: Option<ValueKind>,
}

impl SimpleCaseBuilder {
    /// Add another WHEN branch. Declaration order is evaluation order.
    pub fn when(mut self, matches: impl Into<Expr>, result: impl Into<Expr>) -> Self {
        self.branches.push(Branch {
            condition: BranchCondition::Matches(matches.into()),
            result: result.into(),
        });
        self
    }

    /// Declare the output kind all results must coerce to.
    pub fn output(mut self, kind: ValueKind) -> Self {
        self.output = Some(kind);
        self
    }

    /// Finish without a default. Unmatched records yield NULL.
    pub fn end(self) -> Result<CaseExpr> {
        finish(Some(self.subject), self.branches, None, self.output)
    }

    /// Finish with a default for unmatched records.
    pub fn r#else(self, default: impl Into<Expr>) -> Result<CaseExpr> {
        finish(Some(self.subject), self.branches, Some(default.into()), self.output)
    }
}

// =============================================================================
// Finish
// =============================================================================

/// Check literal results against each other and the declared output kind.
///
/// Literal branch results and a literal default must unify into one output
/// kind here, so a `TypeMismatch` surfaces at construction rather than on the
/// first record. Field references and derived results are checked per record
/// at evaluation, when their kinds are known.
fn finish(
    subject: Option<Expr>,
    branches: SmallVec<[Branch; 4]>,
    default: Option<Expr>,
    declared: Option<ValueKind>,
) -> Result<CaseExpr> {
    let mut output = declared;
    let results = branches.iter().map(|b| &b.result).chain(default.as_ref());
    for result in results {
        let Expr::Literal(value) = result else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let found = value.kind();
        output = Some(match output {
            None => found,
            Some(kind) => {
                let unified = unify_kinds(kind, found)?;
                if declared.is_some() && unified != kind {
                    return Err(RowcaseError::TypeMismatch {
                        expected: kind,
                        found,
                    });
                }
                unified
            }
        });
    }
    Ok(CaseExpr {
        subject,
        branches,
        default,
        output,
    })
}
