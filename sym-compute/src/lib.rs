//! Symbolic manipulation and numerical evaluation of small expression trees.
//!
//! Expressions are built from two kinds of leaves, numeric constants and named variables, using
//! the combinators in [`symbolic::build`] (or the equivalent operator overloads on
//! [`symbolic::Expr`]). A tree can then be:
//!
//! - differentiated with respect to a variable ([`symbolic::derivative`]),
//! - simplified with a small set of local rewrite rules ([`symbolic::simplify`]),
//! - evaluated given variable bindings ([`numerical::eval::Eval`]),
//! - rendered to a fully parenthesized string through its [`Display`](std::fmt::Display)
//!   implementation.
//!
//! ```
//! use sym_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use sym_compute::symbolic::{build::pow, simplify, Expr};
//!
//! let x = Expr::variable("x");
//! let cube = pow(x, Expr::constant(3.0));
//! let derivative = cube.derivative("x");
//!
//! let ctxt = Ctxt::new().with_var("x", 2.0);
//! assert_eq!(derivative.eval(&ctxt), 12.0);
//! assert_eq!(simplify(&derivative).to_string(), "(3*x^2)");
//! ```

pub mod consts;
pub mod numerical;
pub mod symbolic;
