use crate::api::enums::error_kind::ErrorKind;
use thiserror_no_std::Error;

/// Represents errors that can occur while analysing, encrypting or decrypting text.
///
/// Every variant reflects a caller contract breach; none of them are transient,
/// so nothing in this crate catches or retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The character is not an ASCII letter.
    #[error("Character {0:?} is not an ASCII letter")]
    NotALetter(char),

    #[error("Letter index {0} is outside of the alphabet range 0..26")]
    IndexOutOfRange(usize),

    #[error("Shift {0} is outside of the range 0..26")]
    ShiftOutOfRange(usize),

    /// The reference distribution has a zero entry, which would be used as a divisor.
    #[error("Expected frequency of letter index {0} is zero")]
    ZeroExpectedFrequency(usize),

    #[error("Text of length {0} is too short; at least 2 letters are required")]
    TextTooShort(usize),

    #[error("Key length must be at least 1")]
    ZeroKeyLength,

    /// The half open range `[1, upper_bound)` contains no candidates.
    #[error("Key length upper bound {0} leaves no candidate key lengths; it must be at least 2")]
    KeyLengthUpperBoundTooSmall(usize),

    #[error("Key must contain at least one letter")]
    EmptyKey,

    #[error("Text must contain at least one letter")]
    EmptyInput,

    #[error("Texts differ in length ({0} vs {1})")]
    LengthMismatch(usize, usize),
}

impl AnalysisError {
    /// Returns the broad category this error falls under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::EmptyInput => ErrorKind::EmptyInput,
            AnalysisError::LengthMismatch(..) => ErrorKind::LengthMismatch,
            AnalysisError::NotALetter(_)
            | AnalysisError::IndexOutOfRange(_)
            | AnalysisError::ShiftOutOfRange(_)
            | AnalysisError::ZeroExpectedFrequency(_)
            | AnalysisError::TextTooShort(_)
            | AnalysisError::ZeroKeyLength
            | AnalysisError::KeyLengthUpperBoundTooSmall(_)
            | AnalysisError::EmptyKey => ErrorKind::InvalidInput,
        }
    }
}

/// A result type around the analysis functions.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
