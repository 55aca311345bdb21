//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the children of that node
//! are expected to already be simplified.

pub mod add;
pub mod multiply;
pub mod power;

use crate::symbolic::{step_collector::StepCollector, Expr};
use super::step::Step;

/// If the expression is a sum, calls the given transformation function with both terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sum(a, b) = expr {
        f(a, b)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with both factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Product(a, b) = expr {
        f(a, b)
    } else {
        None
    }
}

/// If the expression is a power, calls the given transformation function with the base and the
/// exponent.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Power(base, exponent) = expr {
        f(base, exponent)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
}
