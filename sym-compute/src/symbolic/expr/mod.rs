//! The expression tree type and its rendering.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal if
//! they are the same kind of node with equal children, in the same order. It says nothing about
//! semantic equality; `x + y` and `y + x` are different trees. Constants compare with plain
//! floating-point equality, so `0.0 == -0.0` and `NaN != NaN`.
//!
//! # Rendering
//!
//! The [`Display`](std::fmt::Display) implementation produces a fully parenthesized form meant for
//! human inspection. It is not a parseable format.
//!
//! | Node       | Rendered as      |
//! |------------|------------------|
//! | constant   | `1`, `0.5`, `-4` |
//! | variable   | `x`              |
//! | sum        | `(a+b)`          |
//! | product    | `(a*b)`          |
//! | power      | `base^exponent`  |
//! | sine       | `sin(a)`         |
//! | cosine     | `cos(a)`         |
//!
//! Constants use the shortest form that reads back as the same value. Magnitudes below `1e-4` or
//! from `1e21` up switch to exponent notation (`1e+21`, `2.5e-07`), and the non-finite values
//! render as `+Inf`, `-Inf` and `NaN`.

mod iter;

use iter::ExprIter;
use std::ops::{Add, Div, Mul, Neg, Sub};
use super::build;

/// A mathematical expression.
///
/// Every node owns its children. Trees are never mutated after construction; every
/// transformation in this crate returns a new tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `2` or `-0.5`.
    Constant(f64),

    /// A named unknown, such as `x`, resolved when the expression is evaluated.
    Variable(String),

    /// Two terms added together.
    Sum(Box<Expr>, Box<Expr>),

    /// Two factors multiplied together.
    Product(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent. Both may be arbitrary expressions.
    Power(Box<Expr>, Box<Expr>),

    /// The sine of an expression, in radians.
    Sin(Box<Expr>),

    /// The cosine of an expression, in radians.
    Cos(Box<Expr>),
}

/// Writes a constant in its shortest form, in exponent notation for very large or small
/// magnitudes.
fn fmt_constant(value: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if value.is_nan() {
        return write!(f, "NaN");
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { '+' } else { '-' };
        return write!(f, "{}Inf", sign);
    }

    // `{:e}` gives the same shortest digits as `{}`, with the exponent split out
    let scientific = format!("{:e}", value);
    let parts = scientific.split_once('e')
        .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exponent)) if !(-4..21).contains(&exponent) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
        },
        _ => write!(f, "{}", value),
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => fmt_constant(*value, f),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Sum(a, b) => write!(f, "({}+{})", a, b),
            Self::Product(a, b) => write!(f, "({}*{})", a, b),
            Self::Power(base, exponent) => write!(f, "{}^{}", base, exponent),
            Self::Sin(value) => write!(f, "sin({})", value),
            Self::Cos(value) => write!(f, "cos({})", value),
        }
    }
}

impl Expr {
    /// Creates a constant leaf.
    pub const fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable leaf with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// If the expression is a [`Expr::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant `0`.
    ///
    /// The comparison is exact. A constant like `1e-300` is **not** zero, and neither is a
    /// subtree that merely evaluates to zero.
    pub fn is_zero(&self) -> bool {
        self.as_constant() == Some(0.0)
    }

    /// Returns true if the expression is the constant `1`. The comparison is exact.
    pub fn is_one(&self) -> bool {
        self.as_constant() == Some(1.0)
    }

    /// If the expression is a [`Expr::Variable`], returns a reference to its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Computes the derivative of this expression with respect to the variable named `with`.
    ///
    /// See [`derivative`](crate::symbolic::derivative()) for the rules applied.
    pub fn derivative(&self, with: &str) -> Self {
        super::derivative(self, with)
    }

    /// Returns the direct children of this node, from left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Sum(a, b) | Self::Product(a, b) | Self::Power(a, b) => vec![&**a, &**b],
            Self::Sin(value) | Self::Cos(value) => vec![&**value],
        }
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the names of every variable referenced in the tree, sorted and without duplicates.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = self.post_order_iter()
            .filter_map(Expr::as_variable)
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

/// Adds two [`Expr`]s together with [`build::add`]. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        build::add(self, rhs)
    }
}

/// Subtracts with [`build::sub`], producing `self + rhs * -1`.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        build::sub(self, rhs)
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        build::mul(self, rhs)
    }
}

/// Divides with [`build::div`], producing `self * rhs^-1`.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        build::div(self, rhs)
    }
}

/// Multiplies this expression by -1. Unlike numeric negation, a constant is **not** folded:
/// `-Expr::constant(2.0)` renders as `(2*-1)`.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        build::negate(self)
    }
}
