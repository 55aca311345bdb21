//! Repeated evaluation of a Newton's-method step.

use crate::error::{CliError, NonFiniteIterate};
use sym_compute::numerical::{ctxt::Ctxt, eval::Eval};
use sym_compute::symbolic::{roots::euler, Expr};
use sym_error::Error;

/// Options controlling when the iteration stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// The maximum number of steps to take.
    pub max_iterations: usize,

    /// Stop once two successive estimates differ by at most this much.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance: 1e-12,
        }
    }
}

/// The estimates produced by [`solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Iterates {
    /// Every estimate, starting with the initial guess.
    pub values: Vec<f64>,

    /// The final estimate, equal to the last entry of `values`.
    pub estimate: f64,

    /// Whether the last two estimates were within the tolerance.
    pub converged: bool,
}

/// Searches for a root of `f` with respect to `var` using Newton's method, starting at `start`.
/// Every other variable in `f` is taken from `bindings`.
///
/// The step expression from [`euler`] is built once and evaluated repeatedly, each time with
/// `var` bound to the previous estimate.
pub fn solve(
    f: &Expr,
    var: &str,
    start: f64,
    bindings: &Ctxt,
    options: Options,
) -> Result<Iterates, CliError> {
    let step = euler(f, var);
    let mut ctxt = bindings.clone();
    let mut values = vec![start];
    let mut current = start;

    for iteration in 1..=options.max_iterations {
        ctxt.add_var(var, current);
        let next = step.eval(&ctxt);
        log::debug!("iteration {}: {} = {}", iteration, var, next);

        if !next.is_finite() {
            let input = step.to_string();
            let kind = NonFiniteIterate {
                var: var.to_string(),
                iteration,
                previous: current,
                value: next,
            };
            let err = Error::new(vec![0..input.len()], kind);
            return Err(CliError::new("step", input, vec![err]));
        }

        values.push(next);
        if (next - current).abs() <= options.tolerance {
            return Ok(Iterates { values, estimate: next, converged: true });
        }
        current = next;
    }

    log::warn!(
        "no convergence after {} iterations (last estimate {} = {})",
        options.max_iterations,
        var,
        current,
    );
    Ok(Iterates { values, estimate: current, converged: false })
}
