use crate::symbolic::Expr;
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> f64;

    /// Evaluate the expression to produce a value, using an empty context. Every variable
    /// evaluates to `0.0`.
    fn eval_default(&self) -> f64 {
        self.eval(&Ctxt::default())
    }
}

/// Evaluation is a read-only traversal, so the same tree can be evaluated any number of times,
/// with different contexts, including from multiple threads at once.
///
/// - Variables missing from the context evaluate to `0.0`.
/// - Powers use [`f64::powf`]: `0^-1` is infinity, and a negative base with a fractional exponent
///   is `NaN`.
/// - `sin` and `cos` take their argument in radians.
impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> f64 {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => ctxt.value_of(name),
            Expr::Sum(a, b) => a.eval(ctxt) + b.eval(ctxt),
            Expr::Product(a, b) => a.eval(ctxt) * b.eval(ctxt),
            Expr::Power(base, exponent) => base.eval(ctxt).powf(exponent.eval(ctxt)),
            Expr::Sin(value) => value.eval(ctxt).sin(),
            Expr::Cos(value) => value.eval(ctxt).cos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::symbolic::build::{cos, div, invert, mul, pow, sin, sub};
    use std::{f64::consts::PI, sync::Arc, thread};
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn constant_ignores_bindings() {
        let expr = Expr::constant(3.0);
        assert_eq!(expr.eval_default(), 3.0);
        assert_eq!(expr.eval(&Ctxt::new().with_var("x", 10.0)), 3.0);
    }

    #[test]
    fn unbound_variable_is_zero() {
        assert_eq!(Expr::variable("unbound").eval_default(), 0.0);
    }

    #[test]
    fn arithmetic() {
        // (x - 4) / (x * 2)
        let expr = div(sub(x(), Expr::constant(4.0)), mul(x(), Expr::constant(2.0)));
        let ctxt = Ctxt::new().with_var("x", 8.0);
        assert_eq!(expr.eval(&ctxt), 0.25);
    }

    #[test]
    fn trigonometry_in_radians() {
        let ctxt = Ctxt::new().with_var("x", PI / 2.0);
        assert_float_absolute_eq!(sin(x()).eval(&ctxt), 1.0, 1e-12);
        assert_float_absolute_eq!(cos(x()).eval(&ctxt), 0.0, 1e-12);
    }

    #[test]
    fn ieee_edge_cases() {
        let ctxt = Ctxt::new().with_var("x", 0.0);
        assert_eq!(invert(x()).eval(&ctxt), f64::INFINITY);

        let negative_root = pow(Expr::constant(-8.0), Expr::constant(0.5));
        assert!(negative_root.eval_default().is_nan());
    }

    #[test]
    fn reusable_with_different_bindings() {
        let square = pow(x(), Expr::constant(2.0));
        let values = [1.0, 2.0, 3.0]
            .into_iter()
            .map(|v| square.eval(&Ctxt::new().with_var("x", v)))
            .collect::<Vec<_>>();
        assert_eq!(values, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn shared_across_threads() {
        let expr = Arc::new(mul(x(), Expr::variable("y")));
        let ctxt = Arc::new(Ctxt::new().with_var("y", 3.0));

        let handles = (0..4)
            .map(|i| {
                let expr = Arc::clone(&expr);
                let ctxt = Arc::clone(&ctxt);
                thread::spawn(move || {
                    let local = (*ctxt).clone().with_var("x", i as f64);
                    expr.eval(&local) + expr.eval(&ctxt)
                })
            })
            .collect::<Vec<_>>();

        let results = handles.into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(results, vec![0.0, 3.0, 6.0, 9.0]);
    }
}
