//! Evaluation of expressions and predicates against records.
//!
//! Evaluation is pure: it reads the record (and any record reachable through
//! a declared one-hop relation) and produces one value, with no shared state
//! between calls. Evaluating the same expression against an unchanged record
//! twice yields the same result.

use crate::expr::case::{Branch, BranchCondition};
use crate::expr::{CaseExpr, Expr, Predicate};
use crate::error::Result;
use crate::record::Record;
use crate::value::Value;

impl Expr {
    /// Resolve this expression against a record.
    pub fn eval(&self, record: &Record) -> Result<Value> {
        match self {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Field(path) => record.lookup_path(path).cloned(),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(record)?;
                let rhs = rhs.eval(record)?;
                lhs.arith(*op, &rhs)
            }
            Expr::Case(case) => case.eval(record),
        }
    }
}

impl Predicate {
    /// Evaluate this predicate against a record.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        match self {
            Predicate::Compare { op, lhs, rhs } => {
                let lhs = lhs.eval(record)?;
                let rhs = rhs.eval(record)?;
                Ok(match lhs.compare(&rhs)? {
                    Some(ord) => op.matches(ord),
                    // NULL on either side: no match, regardless of operator
                    None => false,
                })
            }
            Predicate::All(conditions) => {
                for condition in conditions {
                    if !condition.matches(record)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Predicate::Any(conditions) => {
                for condition in conditions {
                    if condition.matches(record)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Predicate::Not(inner) => Ok(!inner.matches(record)?),
            Predicate::In { expr, set } => {
                let subject = expr.eval(record)?;
                if subject.is_null() {
                    return Ok(false);
                }
                for candidate in set {
                    if subject.eq_value(candidate)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

impl CaseExpr {
    /// Evaluate this CASE expression against a record.
    ///
    /// Branches are scanned in declaration order; the first matching branch
    /// selects its result and no later branch condition is evaluated. When no
    /// branch matches, the default (or NULL) is used. The selected result is
    /// resolved against the same record, then coerced to the output kind if
    /// one is known.
    pub fn eval(&self, record: &Record) -> Result<Value> {
        let subject = match &self.subject {
            Some(expr) => Some(expr.eval(record)?),
            None => None,
        };

        let mut matched = None;
        for branch in &self.branches {
            if branch_matches(branch, subject.as_ref(), record)? {
                matched = Some(&branch.result);
                break;
            }
        }
        crate::rowcase_trace_eval!(self.branches.len(), matched.is_some());

        let value = match matched.or(self.default.as_ref()) {
            Some(result) => result.eval(record)?,
            None => Value::Null,
        };
        match self.output {
            Some(kind) => value.coerce(kind),
            None => Ok(value),
        }
    }
}

fn branch_matches(branch: &Branch, subject: Option<&Value>, record: &Record) -> Result<bool> {
    match &branch.condition {
        BranchCondition::When(predicate) => predicate.matches(record),
        BranchCondition::Matches(expr) => {
            // The builders only pair Matches with a subject; without one the
            // branch matches nothing.
            let Some(subject) = subject else {
                return Ok(false);
            };
            let candidate = expr.eval(record)?;
            subject.eq_value(&candidate)
        }
    }
}
