//! First-match-wins CASE/WHEN expression evaluation over in-memory records.
//!
//! A [`CaseExpr`] maps an ordered list of (condition, result) branches plus an
//! optional default to one output value per record. Conditions come in two
//! flavors: equality against a subject expression ([`case_on`], the simple
//! form) and arbitrary predicates over the whole record ([`case`], the
//! searched form). Results may be literals, field references (including
//! one-hop relation paths) or derived expressions, and evaluation is a pure
//! function of the expression and the record.
//!
//! ```
//! use rowcase::prelude::*;
//!
//! # fn main() -> rowcase::Result<()> {
//! let label = case_on(field("integer"))
//!     .when(val(1), val("one"))
//!     .when(val(2), val("two"))
//!     .r#else(val("other"))?;
//!
//! let record = Record::new().with("integer", 1).with("integer2", 3);
//! assert_eq!(label.eval(&record)?, Value::from("one"));
//!
//! let ordering = case()
//!     .when(lt(field("integer2"), field("integer")), val("less"))
//!     .when(gt(field("integer2"), field("integer")), val("greater"))
//!     .r#else(val("equal"))?;
//! assert_eq!(ordering.eval(&record)?, Value::from("greater"));
//! # Ok(())
//! # }
//! ```
//!
//! [`RecordSet`] provides the bulk operations a data-access layer would run
//! on top of the evaluator: annotate, update, filter, sum and ordering.

pub mod error;
mod eval;
pub mod expr;
pub mod record;
pub mod rows;
mod trace;
pub mod value;

// Re-export key types and functions
pub use error::{Result, RowcaseError};
pub use expr::{CaseExpr, Expr, Predicate, case, case_on, field, val};
pub use record::{FieldPath, Record};
pub use rows::RecordSet;
pub use value::{Value, ValueKind};

/// Everything needed to build and evaluate expressions.
pub mod prelude {
    pub use crate::error::{Result, RowcaseError};
    pub use crate::expr::case::{CaseExpr, case, case_on};
    pub use crate::expr::cmp::{eq, gt, gte, in_values, lt, lte, neq};
    pub use crate::expr::logical::{and, and2, not, or, or2};
    pub use crate::expr::{Expr, Predicate, field, val};
    pub use crate::record::{FieldPath, Record};
    pub use crate::rows::RecordSet;
    pub use crate::value::{Value, ValueKind};
}
