//! Simplification rules for products.

use crate::symbolic::{
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
    Expr,
};

/// `0*a = 0`
/// `a*0 = 0`
///
/// The zero factor itself is returned, so a `-0` factor stays `-0`. The other factor is dropped
/// even if it would evaluate to infinity or `NaN`.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |a, b| {
        if a.is_zero() {
            Some(a.clone())
        } else if b.is_zero() {
            Some(b.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |a, b| {
        if a.is_one() {
            Some(b.clone())
        } else if b.is_one() {
            Some(a.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Multiplies two constants together.
pub fn multiply_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |a, b| {
        Some(Expr::Constant(a.as_constant()? * b.as_constant()?))
    })?;

    step_collector.push(Step::MultiplyConstants);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| multiply_constants(expr, step_collector))
}
