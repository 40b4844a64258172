//! Logical operators (AND, OR, NOT).
//!
//! This module provides both function-based and operator-based logical
//! composition:
//!
//! ```ignore
//! // Function style
//! and2(condition1, condition2)
//! or2(condition1, condition2)
//! not(condition)
//!
//! // Operator style (via std::ops traits)
//! condition1 & condition2   // BitAnd
//! condition1 | condition2   // BitOr
//! !condition                // Not
//! ```

use core::ops::{BitAnd, BitOr, Not};

use super::Predicate;

// =============================================================================
// NOT
// =============================================================================

/// Logical NOT.
pub fn not(predicate: Predicate) -> Predicate {
    Predicate::Not(Box::new(predicate))
}

// =============================================================================
// AND
// =============================================================================

/// Logical AND of multiple conditions.
///
/// True when every condition matches; an empty iterator matches everything.
pub fn and<I>(conditions: I) -> Predicate
where
    I: IntoIterator<Item = Predicate>,
{
    let mut conditions: Vec<Predicate> = conditions.into_iter().collect();
    if conditions.len() == 1 {
        return conditions.remove(0);
    }
    Predicate::All(conditions)
}

/// Logical AND of two conditions.
pub fn and2(left: Predicate, right: Predicate) -> Predicate {
    Predicate::All(vec![left, right])
}

// =============================================================================
// OR
// =============================================================================

/// Logical OR of multiple conditions.
///
/// True when any condition matches; an empty iterator matches nothing.
pub fn or<I>(conditions: I) -> Predicate
where
    I: IntoIterator<Item = Predicate>,
{
    let mut conditions: Vec<Predicate> = conditions.into_iter().collect();
    if conditions.len() == 1 {
        return conditions.remove(0);
    }
    Predicate::Any(conditions)
}

/// Logical OR of two conditions.
pub fn or2(left: Predicate, right: Predicate) -> Predicate {
    Predicate::Any(vec![left, right])
}

// =============================================================================
// std::ops
// =============================================================================

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        and2(self, rhs)
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Predicate) -> Predicate {
        or2(self, rhs)
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }
}
