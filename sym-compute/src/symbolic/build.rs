//! Combinators that compose expressions into normalized trees.
//!
//! Only sums, products and powers exist as binary nodes. The other arithmetic operations are
//! expressed in terms of them:
//!
//! - `negate(e) = e * -1`
//! - `invert(e) = e^-1`
//! - `sub(a, b) = a + negate(b)`
//! - `div(a, b) = a * invert(b)`
//!
//! None of these functions simplify their result.

use crate::consts::NEG_ONE;
use super::Expr;

/// `a + b`
pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Sum(Box::new(a), Box::new(b))
}

/// `a - b`, built as `a + b * -1`.
pub fn sub(a: Expr, b: Expr) -> Expr {
    add(a, negate(b))
}

/// `a * b`
pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Product(Box::new(a), Box::new(b))
}

/// `a / b`, built as `a * b^-1`.
pub fn div(a: Expr, b: Expr) -> Expr {
    mul(a, invert(b))
}

/// `a ^ b`
pub fn pow(a: Expr, b: Expr) -> Expr {
    Expr::Power(Box::new(a), Box::new(b))
}

/// `-e`, built as `e * -1`.
pub fn negate(e: Expr) -> Expr {
    mul(e, NEG_ONE)
}

/// `1 / e`, built as `e^-1`.
pub fn invert(e: Expr) -> Expr {
    pow(e, NEG_ONE)
}

/// `sin(e)`
pub fn sin(e: Expr) -> Expr {
    Expr::Sin(Box::new(e))
}

/// `cos(e)`
pub fn cos(e: Expr) -> Expr {
    Expr::Cos(Box::new(e))
}
