//! Error types for date parsing and arithmetic.

/// Common error type for date operations.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("failed to parse '{input}' as a date: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("date arithmetic out of range: {0}")]
    OutOfRange(String),

    #[error("invalid format pattern '{0}'")]
    Pattern(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
