//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! The expression engine in `sym-compute` is total and never fails; errors only arise in the
//! tools built around it, such as malformed command-line bindings or a numeric iteration that
//! diverges. Those errors are associated with regions of the user's input, so they are reported
//! with [`ariadne`], highlighting the offending text.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, using `input` as the source text.
    pub fn write_report(&self, src_id: &str, input: &str, w: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}
