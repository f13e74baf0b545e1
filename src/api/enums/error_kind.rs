/// Broad category of a failure, independent of the specific error type.
///
/// Callers which only care about 'what kind of contract did I break' can match on this
/// instead of on individual error variants.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// A non-letter character, an out of range index or shift, or a zero valued
    /// expected frequency used as a divisor.
    InvalidInput,

    /// An empty text was passed where at least one character is required.
    EmptyInput,

    /// Two texts of unequal length were passed to an operation requiring equal length.
    LengthMismatch,

    /// A reference frequency table could not be read or parsed.
    MalformedReferenceTable,
}
