//! Numerical evaluation of expressions.
//!
//! An expression is reduced to an [`f64`] using a [`Ctxt`](ctxt::Ctxt), which binds variable
//! names to values. Evaluation follows IEEE-754 semantics throughout; there is no error type.

pub mod ctxt;
pub mod eval;
