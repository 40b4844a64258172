//! Arithmetic operations using std::ops traits.
//!
//! Implements `Add`, `Sub`, `Mul`, `Div` for [`Expr`], enabling natural Rust
//! syntax for expression arithmetic:
//!
//! ```ignore
//! field("integer") + val(1)
//! field("integer2") * val(2) - field("integer")
//! ```

use core::ops::{Add, Div, Mul, Sub};

use super::{ArithOp, Expr};

#[inline]
fn binary(op: ArithOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

// =============================================================================
// Addition
// =============================================================================

impl<Rhs: Into<Expr>> Add<Rhs> for Expr {
    type Output = Expr;

    fn add(self, rhs: Rhs) -> Expr {
        binary(ArithOp::Add, self, rhs.into())
    }
}

// =============================================================================
// Subtraction
// =============================================================================

impl<Rhs: Into<Expr>> Sub<Rhs> for Expr {
    type Output = Expr;

    fn sub(self, rhs: Rhs) -> Expr {
        binary(ArithOp::Sub, self, rhs.into())
    }
}

// =============================================================================
// Multiplication
// =============================================================================

impl<Rhs: Into<Expr>> Mul<Rhs> for Expr {
    type Output = Expr;

    fn mul(self, rhs: Rhs) -> Expr {
        binary(ArithOp::Mul, self, rhs.into())
    }
}

// =============================================================================
// Division
// =============================================================================

impl<Rhs: Into<Expr>> Div<Rhs> for Expr {
    type Output = Expr;

    fn div(self, rhs: Rhs) -> Expr {
        binary(ArithOp::Div, self, rhs.into())
    }
}
