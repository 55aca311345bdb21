use clap::ValueEnum;
use sym_compute::symbolic::{
    build::{cos, mul, pow, sin, sub},
    Expr,
};
use crate::projectile;

/// Expressions available to the `derive` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// `x^3 - 2x + 5`
    Poly,

    /// `sin(x) * cos(x^2)`
    Trig,

    /// Horizontal distance travelled by a projectile, in terms of `h`, `s` and `a`.
    Projectile,
}

impl Demo {
    /// Builds the expression for this demo.
    pub fn expr(self) -> Expr {
        let x = || Expr::variable("x");
        match self {
            Self::Poly => sub(pow(x(), Expr::constant(3.0)), mul(Expr::constant(2.0), x()))
                + Expr::constant(5.0),
            Self::Trig => mul(sin(x()), cos(pow(x(), Expr::constant(2.0)))),
            Self::Projectile => projectile::distance(),
        }
    }

    /// The variable the demo is differentiated with respect to, unless overridden.
    pub fn default_var(self) -> &'static str {
        match self {
            Self::Poly | Self::Trig => "x",
            Self::Projectile => projectile::ANGLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use sym_compute::numerical::{ctxt::Ctxt, eval::Eval};
    use sym_compute::symbolic::simplify;
    use super::*;

    #[test]
    fn poly_derivative() {
        let derivative = simplify(&Demo::Poly.expr().derivative("x"));
        let ctxt = Ctxt::new().with_var("x", 2.0);
        // 3x^2 - 2
        assert_eq!(derivative.eval(&ctxt), 10.0);
    }

    #[test]
    fn variables() {
        assert_eq!(Demo::Poly.expr().variables(), vec!["x"]);
        assert_eq!(Demo::Projectile.expr().variables(), vec!["a", "h", "s"]);
    }
}
