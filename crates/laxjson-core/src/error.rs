//! Error type for the strict parse entry points.

use thiserror::Error;

/// The input was not well-formed JSON.
///
/// Only the strict entry points ([`try_parse_str`](crate::try_parse_str),
/// [`try_parse_slice`](crate::try_parse_slice)) surface this. The lenient
/// entry points fold every failure into `Null`, and the navigation and
/// coercion layer has no error path at all.
#[derive(Error, Debug)]
#[error("JSON parse error: {0}")]
pub struct ParseError(#[from] serde_json::Error);

impl ParseError {
    /// 1-based line where the deserializer gave up.
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// 1-based column on that line.
    pub fn column(&self) -> usize {
        self.0.column()
    }
}
