//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes. The set of node kinds
//! is deliberately small and closed: constants, variables, binary sums, binary products, powers,
//! and the two trigonometric functions `sin` and `cos`. Subtraction, negation, division and
//! reciprocals are not separate node kinds; the combinators in [`build`] normalize them into the
//! core kinds (for example, `a - b` becomes `a + b * -1`, and `a / b` becomes `a * b^-1`).
//!
//! ```
//! use sym_compute::symbolic::{build::sub, Expr};
//!
//! let expr = sub(Expr::variable("x"), Expr::constant(2.0));
//! assert_eq!(expr.to_string(), "(x+(2*-1))");
//! ```
//!
//! # Differentiation
//!
//! [`derivative()`] computes the symbolic derivative of any tree with respect to a named
//! variable. It never fails, but it also does no cleanup: the result usually contains
//! redundant structure, such as multiplications by `1` and additions of `0`.
//!
//! # Simplification
//!
//! [`simplify()`] removes that redundant structure with a single bottom-up pass of local rewrite
//! rules (see [`mod@simplify`]). The rules applied can be collected with
//! [`simplify_with_steps()`].
//!
//! ```
//! use sym_compute::symbolic::{build::mul, simplify, Expr};
//!
//! let square = mul(Expr::variable("x"), Expr::variable("x"));
//! let derivative = square.derivative("x");
//! assert_eq!(derivative.to_string(), "((1*x)+(x*1))");
//! assert_eq!(simplify(&derivative).to_string(), "(x+x)");
//! ```

pub mod build;
pub mod derivative;
pub mod expr;
pub mod roots;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
