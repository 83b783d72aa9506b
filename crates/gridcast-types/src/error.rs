use std::fmt;

/// Result type for gridcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the rendering layer
#[derive(Debug)]
pub enum Error {
    /// Lookup of a formatter name with no binding. Fallback policy (fail
    /// the column, render the raw value) belongs to the caller.
    FormatterNotFound(String),

    /// A value whose shape violates a formatter's input contract
    MalformedValue {
        formatter: &'static str,
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FormatterNotFound(name) => {
                write!(f, "no formatter registered under '{}'", name)
            }
            Error::MalformedValue { formatter, detail } => {
                write!(f, "malformed value for '{}': {}", formatter, detail)
            }
        }
    }
}

impl std::error::Error for Error {}
