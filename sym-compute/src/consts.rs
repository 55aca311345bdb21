//! Constant expressions used throughout the library.

use crate::symbolic::Expr;

pub const ZERO: Expr = Expr::Constant(0.0);

pub const ONE: Expr = Expr::Constant(1.0);

pub const NEG_ONE: Expr = Expr::Constant(-1.0);

pub const TWO: Expr = Expr::Constant(2.0);

/// The exponent used to express a square root as a power.
pub const ONE_HALF: Expr = Expr::Constant(0.5);
