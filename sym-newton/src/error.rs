use ariadne::{Fmt, Label, Report, ReportKind};
use std::ops::Range;
use sym_error::{Error, ErrorKind, EXPR};

/// Builds a report with a single highlighted label, in the same shape for every error kind.
fn single_label_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    label: String,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let span = spans.first().cloned().unwrap_or(0..0);
    let mut builder = Report::build(ReportKind::Error, src_id, span.start)
        .with_message(message)
        .with_label(Label::new((src_id, span)).with_message(label).with_color(EXPR));
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// A `--bind` argument is not of the form `name=value`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidBinding {
    /// Why the binding could not be understood.
    pub reason: &'static str,
}

impl ErrorKind for InvalidBinding {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        single_label_report(
            src_id,
            spans,
            "invalid variable binding".to_string(),
            self.reason.to_string(),
            Some(format!("bindings are written as {}", "name=value".fg(EXPR))),
        )
    }
}

/// The value part of a `--bind` argument is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The text that failed to parse.
    pub value: String,
}

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        single_label_report(
            src_id,
            spans,
            format!("`{}` is not a number", self.value),
            "expected a number here".to_string(),
            None,
        )
    }
}

/// Newton's method produced an infinite or `NaN` estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFiniteIterate {
    /// The name of the variable being solved for.
    pub var: String,

    /// The iteration that produced the value, starting from 1.
    pub iteration: usize,

    /// The estimate the failing iteration started from.
    pub previous: f64,

    /// The value that was produced.
    pub value: f64,
}

impl ErrorKind for NonFiniteIterate {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        single_label_report(
            src_id,
            spans,
            format!("iteration {} produced `{} = {}`", self.iteration, self.var, self.value),
            format!("evaluating this step at `{} = {}`", self.var, self.previous),
            Some("the derivative may be zero or undefined there; try a different starting value".to_string()),
        )
    }
}

/// One or more errors, together with the text they point into.
#[derive(Debug)]
pub struct CliError {
    /// Name of the source shown in the report.
    pub(crate) src_id: &'static str,

    /// The text the error spans refer to.
    pub(crate) input: String,

    pub(crate) errors: Vec<Error>,
}

impl CliError {
    /// Creates a new [`CliError`] from errors that point into `input`.
    pub fn new(src_id: &'static str, input: String, errors: Vec<Error>) -> Self {
        Self { src_id, input, errors }
    }

    /// Report the errors in this [`CliError`] to stderr.
    pub fn report_to_stderr(&self) {
        for err in &self.errors {
            if let Err(io_err) = err.report_to_stderr(self.src_id, &self.input) {
                eprintln!("failed to print error report: {}", io_err);
            }
        }
    }
}
