//! Parsing of `name=value` variable bindings given on the command line.

use crate::error::{CliError, InvalidBinding, InvalidNumber};
use std::ops::Range;
use sym_compute::numerical::ctxt::Ctxt;
use sym_error::Error;

/// Name of the source shown in binding error reports.
const SRC_ID: &str = "bindings";

/// Parses a single `name=value` argument located at `span` within the joined arguments. Spans
/// count characters, not bytes, matching how [`ariadne::Source`] indexes its text.
fn parse_binding(arg: &str, span: Range<usize>) -> Result<(&str, f64), Error> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(Error::new(vec![span], InvalidBinding { reason: "missing `=`" }));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::new(vec![span], InvalidBinding { reason: "missing variable name" }));
    }

    let value_start = span.start + arg.chars().count() - value.chars().count();
    let value_span = if value.is_empty() { span } else { value_start..span.end };
    match value.trim().parse::<f64>() {
        Ok(value) => Ok((name, value)),
        Err(_) => Err(Error::new(
            vec![value_span],
            InvalidNumber { value: value.to_string() },
        )),
    }
}

/// Parses every binding into a [`Ctxt`]. If any are malformed, all of the errors are returned,
/// pointing into the arguments joined by spaces.
pub fn parse_bindings(args: &[String]) -> Result<Ctxt, CliError> {
    let mut ctxt = Ctxt::new();
    let mut errors = Vec::new();
    let mut offset = 0;

    for arg in args {
        let len = arg.chars().count();
        let span = offset..offset + len;
        match parse_binding(arg, span) {
            Ok((name, value)) => ctxt.add_var(name, value),
            Err(err) => errors.push(err),
        }
        offset += len + 1;
    }

    if errors.is_empty() {
        Ok(ctxt)
    } else {
        Err(CliError::new(SRC_ID, args.join(" "), errors))
    }
}
