//! Simplification rules for sums.

use crate::symbolic::{
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
    Expr,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |a, b| {
        if a.is_zero() {
            Some(b.clone())
        } else if b.is_zero() {
            Some(a.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Adds two constants together.
pub fn add_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |a, b| {
        Some(Expr::Constant(a.as_constant()? + b.as_constant()?))
    })?;

    step_collector.push(Step::AddConstants);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| add_constants(expr, step_collector))
}
