//! Simplification rules for power expressions.
//!
//! The rules are tried in a fixed order, and the `0^a` / `1^a` rules run before constant folding.
//! That order is observable: `1^a` collapses to `1` whatever `a` is, and `0^-1` collapses to `0`
//! instead of folding to infinity.

use crate::consts::ONE;
use crate::symbolic::{
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
    Expr,
};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, exponent| {
        if exponent.is_zero() {
            Some(ONE)
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        if exponent.is_one() {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `0^a = 0`
///
/// `0^0` is handled by the [`power_zero`] rule.
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, _| {
        if base.is_zero() {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, _| {
        if base.is_one() {
            Some(base.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// Raises a constant to a constant power.
pub fn power_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |base, exponent| {
        Some(Expr::Constant(base.as_constant()?.powf(exponent.as_constant()?)))
    })?;

    step_collector.push(Step::PowerConstants);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_constants(expr, step_collector))
}
