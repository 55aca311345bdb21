//! Expression constructors for finding roots numerically.
//!
//! These functions only **build** expressions. Neither of them solves anything by itself: the
//! caller evaluates the returned tree, and for [`euler`], feeds the result back in as the next
//! value of the variable.

use crate::consts::{ONE_HALF, TWO};
use super::build::{add, invert, mul, negate, pow};
use super::Expr;

/// Builds the smaller-branch root of `a*v^2 + b*v + c = 0` from the quadratic formula:
///
/// ```text
/// (-b - sqrt(b^2 - 4ac)) / (2a)
/// ```
///
/// Only the `-sqrt` branch is built. The square root is a power of `0.5`, so a negative
/// discriminant evaluates to `NaN`.
pub fn quadratic(a: Expr, b: Expr, c: Expr) -> Expr {
    let discriminant = add(
        pow(b.clone(), TWO),
        mul(Expr::Constant(-4.0), mul(a.clone(), c)),
    );

    mul(
        add(negate(b), negate(pow(discriminant, ONE_HALF))),
        invert(mul(TWO, a)),
    )
}

/// Builds one step of Newton's method for finding a root of `e` with respect to the variable
/// named `v`:
///
/// ```text
/// v - e / (de/dv)
/// ```
///
/// Evaluating the result with `v` bound to the current estimate gives the next estimate.
pub fn euler(e: &Expr, v: &str) -> Expr {
    add(
        Expr::variable(v),
        negate(mul(e.clone(), invert(e.derivative(v)))),
    )
}
