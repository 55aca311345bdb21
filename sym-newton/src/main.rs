mod binding;
mod demo;
mod error;
mod newton;
mod projectile;

use clap::{Parser, Subcommand, ValueEnum};
use demo::Demo;
use env_logger::Env;
use error::CliError;
use sym_compute::numerical::{ctxt::Ctxt, eval::Eval};
use sym_compute::symbolic::{roots::quadratic, simplify, simplify_with_steps, Expr};

#[derive(Parser)]
#[command(author, version, about = "Differentiate, simplify and solve symbolic expressions", long_about = None)]
struct Cli {
    /// Log level; `RUST_LOG` is used when this is not given
    #[arg(long, global = true, value_enum, env = "SYM_LOG")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Find the launch angle that maximizes the horizontal distance of a projectile
    Projectile {
        /// Launch height
        #[arg(long, default_value_t = 1.5)]
        height: f64,

        /// Launch speed
        #[arg(long, default_value_t = 1.0)]
        speed: f64,

        /// Initial guess for the angle, in radians
        #[arg(long, default_value_t = 0.5)]
        start: f64,

        /// Maximum number of Newton steps
        #[arg(long, default_value_t = 10)]
        iterations: usize,

        /// Stop once successive estimates differ by at most this much
        #[arg(long, default_value_t = 1e-12)]
        tolerance: f64,

        /// Print the simplified derivative being solved
        #[arg(long)]
        show_expr: bool,
    },

    /// Build the root expression of `a*x^2 + b*x + c` and evaluate it
    #[command(allow_negative_numbers = true)]
    Quadratic {
        #[arg(long)]
        a: f64,

        #[arg(long)]
        b: f64,

        #[arg(long)]
        c: f64,
    },

    /// Differentiate and simplify a built-in expression
    Derive {
        /// Which expression to differentiate
        #[arg(value_enum)]
        demo: Demo,

        /// Variable to differentiate with respect to
        #[arg(long)]
        with: Option<String>,

        /// Variable bindings used for evaluation, as `name=value`
        #[arg(short, long)]
        bind: Vec<String>,

        /// Print every simplification rule that was applied
        #[arg(long)]
        steps: bool,
    },
}

/// Warns about every variable in `expr` that has no value in `ctxt`.
fn warn_unbound(expr: &Expr, ctxt: &Ctxt) {
    for name in ctxt.unbound(expr.variables()) {
        log::warn!("`{}` is not bound, using 0", name);
    }
}

fn run_projectile(
    height: f64,
    speed: f64,
    start: f64,
    options: newton::Options,
    show_expr: bool,
) -> Result<(), CliError> {
    let slope = projectile::distance().derivative(projectile::ANGLE);
    if show_expr {
        println!("d(distance)/d{} = {}", projectile::ANGLE, simplify(&slope));
    }

    let bindings = Ctxt::new()
        .with_var("h", height)
        .with_var("s", speed);
    let iterates = newton::solve(&slope, projectile::ANGLE, start, &bindings, options)?;

    for (i, value) in iterates.values.iter().enumerate() {
        println!("{:>3}: {} = {}", i, projectile::ANGLE, value);
    }

    let best = iterates.estimate;
    let distance = projectile::distance().eval(&bindings.clone().with_var(projectile::ANGLE, best));
    if iterates.converged {
        println!("best angle: {} rad ({} deg), distance {}", best, best.to_degrees(), distance);
    } else {
        println!("no convergence; last estimate {} rad, distance {}", best, distance);
    }
    Ok(())
}

fn run_derive(demo: Demo, with: Option<String>, bind: &[String], steps: bool) -> Result<(), CliError> {
    let ctxt = binding::parse_bindings(bind)?;
    let with = with.as_deref().unwrap_or(demo.default_var());

    let expr = demo.expr();
    let raw = expr.derivative(with);
    let (simplified, applied) = simplify_with_steps(&raw);

    println!("f = {}", expr);
    println!("df/d{} = {}", with, raw);
    println!("simplified: {}", simplified);

    if steps {
        for (i, step) in applied.iter().enumerate() {
            println!("{:>3}: {}", i + 1, step);
        }
    }

    if !bind.is_empty() {
        warn_unbound(&expr, &ctxt);
        println!("f = {}", expr.eval(&ctxt));
        println!("df/d{} = {}", with, simplified.eval(&ctxt));
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    let result = match cli.command {
        Command::Projectile { height, speed, start, iterations, tolerance, show_expr } => {
            let options = newton::Options { max_iterations: iterations, tolerance };
            run_projectile(height, speed, start, options, show_expr)
        },
        Command::Quadratic { a, b, c } => {
            let root = quadratic(Expr::constant(a), Expr::constant(b), Expr::constant(c));
            println!("{}", root);
            println!("= {}", root.eval_default());
            Ok(())
        },
        Command::Derive { demo, with, bind, steps } => run_derive(demo, with, &bind, steps),
    };

    if let Err(err) = result {
        err.report_to_stderr();
        std::process::exit(1);
    }
}
