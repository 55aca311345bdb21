//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which removes redundant structure from an
//! expression, such as the factors of `1` and terms of `0` left behind by
//! [`derivative`](crate::symbolic::derivative()).
//!
//! Simplification is a single bottom-up pass. The children of a node are simplified first, then
//! at most one local rule from [`rules`] is applied to the node itself:
//!
//! - sums: `0+a = a`, `a+0 = a`, then constant folding
//! - products: `0*a = 0`, `a*0 = 0`, `1*a = a`, `a*1 = a`, then constant folding
//! - powers: `a^0 = 1`, `a^1 = a`, `0^a = 0`, `1^a = 1`, then constant folding
//!
//! `sin` and `cos` nodes are kept as they are, with their argument simplified. Constants and
//! variables are already as simple as they can be.
//!
//! Zero and one are recognized by exact comparison against the literal constants, not by
//! evaluating subtrees. The result of [`simplify`] is a fixed point: simplifying it again yields
//! the same tree.

pub mod rules;
pub mod step;

use crate::symbolic::{step_collector::StepCollector, Expr};
use step::Step;

/// Forwards steps to another collector, logging each one.
struct Traced<'a>(&'a mut dyn StepCollector<Step>);

impl StepCollector<Step> for Traced<'_> {
    fn push(&mut self, step: Step) {
        log::trace!("applied rule `{}`", step);
        self.0.push(step);
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    // simplify the children first, then rebuild this node out of them
    let expr = match expr {
        Expr::Constant(_) | Expr::Variable(_) => return expr.clone(),
        Expr::Sum(a, b) => Expr::Sum(
            Box::new(inner_simplify(a, step_collector)),
            Box::new(inner_simplify(b, step_collector)),
        ),
        Expr::Product(a, b) => Expr::Product(
            Box::new(inner_simplify(a, step_collector)),
            Box::new(inner_simplify(b, step_collector)),
        ),
        Expr::Power(base, exponent) => Expr::Power(
            Box::new(inner_simplify(base, step_collector)),
            Box::new(inner_simplify(exponent, step_collector)),
        ),
        Expr::Sin(value) => return Expr::Sin(Box::new(inner_simplify(value, step_collector))),
        Expr::Cos(value) => return Expr::Cos(Box::new(inner_simplify(value, step_collector))),
    };

    // every rule returns either a child of `expr` or a constant, both of which are already
    // simplified, so one rule per node is enough
    rules::all(&expr, step_collector).unwrap_or(expr)
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut Traced(&mut ()))
}

/// Simplify the given expression, reporting every rule applied to the given collector.
pub fn simplify_with_collector(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    inner_simplify(expr, &mut Traced(step_collector))
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied (innermost nodes first). This is useful for
/// debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_with_collector(expr, &mut steps);
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use crate::symbolic::build::{add, cos, mul, pow, sin};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn c(value: f64) -> Expr {
        Expr::constant(value)
    }

    /// Generates a random tree of at most the given depth. Trigonometric nodes are only generated
    /// if `trig` is true.
    fn random_expr(rng: &mut StdRng, depth: u32, trig: bool) -> Expr {
        const CONSTANTS: [f64; 7] = [-2.5, -1.0, 0.0, 0.5, 1.0, 2.0, 3.0];
        const VARIABLES: [&str; 2] = ["x", "y"];

        let kinds = if trig { 6 } else { 4 };
        let kind = if depth == 0 { rng.gen_range(0..2) } else { rng.gen_range(0..kinds) };
        match kind {
            0 => c(CONSTANTS[rng.gen_range(0..CONSTANTS.len())]),
            1 => Expr::variable(VARIABLES[rng.gen_range(0..VARIABLES.len())]),
            2 => add(random_expr(rng, depth - 1, trig), random_expr(rng, depth - 1, trig)),
            3 => {
                if rng.gen_bool(0.5) {
                    mul(random_expr(rng, depth - 1, trig), random_expr(rng, depth - 1, trig))
                } else {
                    // small non-negative integer exponents keep every value finite, so the
                    // `0^a` rule cannot change the result
                    let exponent = c(rng.gen_range(0..4) as f64);
                    pow(random_expr(rng, depth - 1, trig), exponent)
                }
            },
            4 => sin(random_expr(rng, depth - 1, trig)),
            _ => cos(random_expr(rng, depth - 1, trig)),
        }
    }

    #[test]
    fn identity_eliminations() {
        assert_eq!(simplify(&add(c(0.0), x())).to_string(), "x");
        assert_eq!(simplify(&mul(c(1.0), x())).to_string(), "x");
        assert_eq!(simplify(&pow(x(), c(0.0))).to_string(), "1");
    }

    #[test]
    fn add_rules() {
        assert_eq!(simplify(&add(x(), c(0.0))), x());
        assert_eq!(simplify(&add(c(2.0), c(3.5))), c(5.5));
        assert_eq!(simplify(&add(x(), c(1.0))).to_string(), "(x+1)");
    }

    #[test]
    fn multiply_rules() {
        assert_eq!(simplify(&mul(x(), c(0.0))), c(0.0));
        assert_eq!(simplify(&mul(c(0.0), sin(x()))), c(0.0));
        assert_eq!(simplify(&mul(x(), c(1.0))), x());
        assert_eq!(simplify(&mul(c(-2.0), c(4.0))), c(-8.0));
        assert_eq!(simplify(&mul(c(2.0), x())).to_string(), "(2*x)");
    }

    #[test]
    fn multiply_zero_keeps_the_zero_factor() {
        let simplified = simplify(&mul(x(), c(-0.0)));
        assert!(simplified.as_constant().unwrap().is_sign_negative());
    }

    #[test]
    fn power_rules() {
        assert_eq!(simplify(&pow(x(), c(1.0))), x());
        assert_eq!(simplify(&pow(c(2.0), c(10.0))), c(1024.0));
        assert_eq!(simplify(&pow(x(), c(2.0))).to_string(), "x^2");
    }

    #[test]
    fn power_base_rules_run_before_folding() {
        // `1^a` collapses even when `a` is not a number
        assert_eq!(simplify(&pow(c(1.0), x())), c(1.0));

        // `0^-1` collapses to 0 instead of folding to infinity
        assert_eq!(simplify(&pow(c(0.0), c(-1.0))), c(0.0));
        assert_eq!(pow(c(0.0), c(-1.0)).eval_default(), f64::INFINITY);

        // `0^0` is still 1
        assert_eq!(simplify(&pow(c(0.0), c(0.0))), c(1.0));
    }

    #[test]
    fn bottom_up() {
        // ((0 + x) * 1) ^ (3 + -2)
        let expr = pow(mul(add(c(0.0), x()), c(1.0)), add(c(3.0), c(-2.0)));
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, x());
        assert_eq!(steps, vec![
            Step::AddZero,
            Step::MultiplyOne,
            Step::AddConstants,
            Step::PowerOne,
        ]);
    }

    #[test]
    fn trig_argument_is_simplified() {
        let expr = sin(mul(c(1.0), add(x(), c(0.0))));
        assert_eq!(simplify(&expr).to_string(), "sin(x)");

        // the function itself is never folded
        assert_eq!(simplify(&cos(c(0.0))).to_string(), "cos(0)");
    }

    #[test]
    fn constants_and_variables_are_fixed_points() {
        let (simplified, steps) = simplify_with_steps(&x());
        assert_eq!(simplified, x());
        assert!(steps.is_empty());
        assert_eq!(simplify(&c(-3.25)), c(-3.25));
    }

    #[test]
    fn no_epsilon_comparison() {
        let almost_zero = add(c(1e-300), x());
        assert_eq!(simplify(&almost_zero), almost_zero);

        let almost_one = mul(c(1.0 + f64::EPSILON), x());
        assert_eq!(simplify(&almost_one), almost_one);
    }

    #[test]
    fn cleans_up_derivative() {
        // d/dx (x^2 + 3x) = 2x + 3
        let expr = add(pow(x(), c(2.0)), mul(c(3.0), x()));
        let simplified = simplify(&expr.derivative("x"));
        assert_eq!(simplified.to_string(), "((2*x)+3)");
    }

    #[test]
    fn does_not_modify_input() {
        let expr = add(c(0.0), mul(c(1.0), x()));
        let before = expr.clone();
        let _ = simplify(&expr);
        assert_eq!(expr, before);
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 5, true);
            let once = simplify(&expr);
            let (twice, steps) = simplify_with_steps(&once);
            assert_eq!(twice.to_string(), once.to_string(), "simplifying {expr} was not idempotent");
            assert!(steps.is_empty(), "rules {steps:?} still applied to {once}");
        }
    }

    #[test]
    fn sound() {
        const TOL: f64 = 1e-9;

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let expr = random_expr(&mut rng, 5, false);
            let simplified = simplify(&expr);
            for _ in 0..5 {
                let ctxt = Ctxt::new()
                    .with_var("x", rng.gen_range(-3.0..3.0))
                    .with_var("y", rng.gen_range(-3.0..3.0));
                let expected = expr.eval(&ctxt);
                let actual = simplified.eval(&ctxt);
                assert!(
                    (expected - actual).abs() <= TOL * expected.abs().max(1.0),
                    "{expr} evaluated to {expected}, but {simplified} evaluated to {actual}",
                );
            }
        }
    }
}
