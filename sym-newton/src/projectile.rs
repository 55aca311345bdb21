//! The launch-angle problem: at which angle does a projectile launched from a height travel the
//! farthest horizontally?
//!
//! Variables:
//!
//! - `h`: launch height
//! - `s`: launch speed
//! - `a`: launch angle, in radians

use sym_compute::symbolic::{
    build::{cos, mul, sin},
    roots::quadratic,
    Expr,
};

/// The coefficient of `t^2` in the height equation `G*t^2 + s*sin(a)*t + h = 0`.
pub const G: f64 = -9.8;

/// The name of the launch angle variable.
pub const ANGLE: &str = "a";

/// The time at which the projectile lands.
///
/// `G` is negative, so the `-sqrt` branch built by [`quadratic`] is the positive root.
pub fn time_of_flight() -> Expr {
    quadratic(
        Expr::constant(G),
        mul(Expr::variable("s"), sin(Expr::variable(ANGLE))),
        Expr::variable("h"),
    )
}

/// The horizontal distance travelled before landing: `s * cos(a) * t`.
pub fn distance() -> Expr {
    mul(
        Expr::variable("s"),
        mul(cos(Expr::variable(ANGLE)), time_of_flight()),
    )
}
