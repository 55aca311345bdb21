//! Symbolic derivatives of the trigonometric functions.

use crate::symbolic::build::{cos, mul, negate, sin};
use crate::symbolic::Expr;

use super::derivative;

/// `sin(f)' = f' * cos(f)`
pub(super) fn sin_derivative(value: &Expr, with: &str) -> Expr {
    mul(derivative(value, with), cos(value.clone()))
}

/// `cos(f)' = -f' * sin(f)`
pub(super) fn cos_derivative(value: &Expr, with: &str) -> Expr {
    mul(negate(derivative(value, with)), sin(value.clone()))
}
