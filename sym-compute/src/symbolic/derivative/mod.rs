//! Symbolic differentiation.
//!
//! The derivative is total: every tree has one, and no rule ever fails. The rules build the new
//! tree directly without cleaning it up, so the result typically contains factors of `1` and terms
//! of `0`. Pass it through [`simplify`](crate::symbolic::simplify()) to remove them.
//!
//! # Variable exponents
//!
//! The power rule treats the exponent as a constant, **even when it depends on the variable being
//! differentiated**. The `ln(base) * exponent'` term of the general rule is never produced, so
//! the derivative of `x^x` (for example) is wrong. Trees with variable exponents should only be
//! differentiated with respect to variables that do not appear in the exponent.

mod function;

use crate::consts::{NEG_ONE, ONE, ZERO};
use super::build::{add, mul, pow};
use super::Expr;

/// `(f + g)' = f' + g'`
fn sum_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    add(derivative(f, with), derivative(g, with))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    add(
        mul(derivative(f, with), g.clone()),
        mul(f.clone(), derivative(g, with)),
    )
}

/// `(f ^ n)' = n * (f' * f ^ (n + -1))`, where `n` is treated as a constant.
fn power_rule(base: &Expr, exponent: &Expr, with: &str) -> Expr {
    mul(
        exponent.clone(),
        mul(
            derivative(base, with),
            pow(base.clone(), add(exponent.clone(), NEG_ONE)),
        ),
    )
}

/// Computes the derivative of the given expression with respect to the variable named `with`.
pub fn derivative(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Constant(_) => ZERO,
        Expr::Variable(name) => {
            if name == with {
                ONE
            } else {
                ZERO
            }
        },
        Expr::Sum(a, b) => sum_rule(a, b, with),
        Expr::Product(a, b) => product_rule(a, b, with),
        Expr::Power(base, exponent) => power_rule(base, exponent, with),
        Expr::Sin(value) => function::sin_derivative(value, with),
        Expr::Cos(value) => function::cos_derivative(value, with),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use crate::symbolic::build::{cos, div, mul, pow, sin, sub};
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::variable("x")
    }

    fn c(value: f64) -> Expr {
        Expr::constant(value)
    }

    /// Boilerplate helper function for evaluating an expression and substituting in "x"
    fn eval_x(e: &Expr, x: f64) -> f64 {
        e.eval(&Ctxt::new().with_var("x", x))
    }

    // Performs central finite difference to approximate the derivative of the provided expression
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let symbolic = derivative(function, "x");

        for point in points.into_iter() {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(function, point);

            assert!((symbolically_computed - numerically_computed).abs() < TOL, "For \"{function}\" at x={point}, symbolically computed derivative was {symbolically_computed} but numerically computed derivative was {numerically_computed}, which was out of tolerance {TOL}")
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(derivative(&c(7.0), "x"), ZERO);
        assert_eq!(derivative(&x(), "x"), ONE);
        assert_eq!(derivative(&Expr::variable("y"), "x"), ZERO);
    }

    #[test]
    fn derivative_of_self() {
        let ctxt = Ctxt::new().with_var("x", 42.0).with_var("y", -3.0);
        assert_eq!(derivative(&x(), "x").eval(&ctxt), 1.0);
        assert_eq!(derivative(&x(), "y").eval(&ctxt), 0.0);
    }

    #[test]
    fn product_rule_shape() {
        let expr = mul(x(), Expr::variable("y"));
        assert_eq!(derivative(&expr, "x").to_string(), "((1*y)+(x*0))");
    }

    #[test]
    fn product_rule_value() {
        let square = mul(x(), x());
        assert_eq!(eval_x(&derivative(&square, "x"), 3.0), 6.0);
    }

    #[test]
    fn power_rule_shape() {
        let cube = pow(x(), c(3.0));
        assert_eq!(derivative(&cube, "x").to_string(), "(3*(1*x^(3+-1)))");
    }

    #[test]
    fn power_rule_value() {
        let cube = pow(x(), c(3.0));
        assert_eq!(eval_x(&derivative(&cube, "x"), 2.0), 12.0);
    }

    #[test]
    fn trig_chain_rule() {
        assert_eq!(eval_x(&derivative(&sin(x()), "x"), 0.0), 1.0);
        assert_eq!(eval_x(&derivative(&cos(x()), "x"), 0.0), 0.0);

        assert_eq!(derivative(&sin(x()), "x").to_string(), "(1*cos(x))");
        assert_eq!(derivative(&cos(x()), "x").to_string(), "((1*-1)*sin(x))");
    }

    #[test]
    fn variable_exponent_is_treated_as_constant() {
        // d/dx x^x = x^x * (ln(x) + 1), but the power rule only produces x * x^(x - 1) = x^x
        let expr = pow(x(), x());
        let at_two = eval_x(&derivative(&expr, "x"), 2.0);
        assert_float_absolute_eq!(at_two, 4.0, 1e-12);
    }

    #[test]
    fn does_not_modify_input() {
        let expr = mul(sin(x()), pow(x(), c(2.0)));
        let before = expr.clone();
        let _ = derivative(&expr, "x");
        assert_eq!(expr, before);
    }

    #[test]
    fn polynomial() {
        // x^2 + x + 1
        test_for_function(&(pow(x(), c(2.0)) + x() + c(1.0)), [0., 1., 2., 5., 8.]);
    }

    #[test]
    fn quotient() {
        // (x^2 + 1) / (x - 3)
        let expr = div(pow(x(), c(2.0)) + c(1.0), sub(x(), c(3.0)));
        test_for_function(&expr, [-2., 0., 1., 2.5, 5.]);
    }

    #[test]
    fn nested_chain_rule() {
        // sin(cos(x^2) * x)
        let expr = sin(mul(cos(pow(x(), c(2.0))), x()));
        test_for_function(&expr, [-1., 0., 0.3, 1.2, 2.]);
    }

    #[test]
    fn square_root() {
        // sqrt(x^2 + 4)
        let expr = pow(pow(x(), c(2.0)) + c(4.0), c(0.5));
        test_for_function(&expr, [-3., 0., 1., 4.]);
    }

    #[test]
    fn partial_derivative_ignores_other_variables() {
        // x * y + sin(y)
        let y = Expr::variable("y");
        let expr = mul(x(), y.clone()) + sin(y);
        let ctxt = Ctxt::new().with_var("x", 2.0).with_var("y", 5.0);
        assert_eq!(derivative(&expr, "x").eval(&ctxt), 5.0);
        assert_float_absolute_eq!(derivative(&expr, "y").eval(&ctxt), 2.0 + 5f64.cos(), 1e-12);
    }
}
