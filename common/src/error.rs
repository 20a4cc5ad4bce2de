use thiserror::Error;

/// Caller-contract violations at the host boundary.
///
/// An address that fails to parse is not one of these; it is reported as an absent result.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("buffer argument is not valid hex: {0}")]
    InvalidBuffer(#[from] hex::FromHexError),

    #[error("batch input line {line} is not valid UTF-8")]
    InvalidBatchLine { line: usize },
}
