use super::analysis_error::{AnalysisError, AnalysisResult};
use crate::api::enums::letter_case::LetterCase;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Converts a letter to its index in the range 0..26.
/// Both 'a' and 'A' map to 0.
///
/// # Errors
///
/// [`AnalysisError::NotALetter`] if `letter` is not an ASCII letter.
pub fn char_to_index(letter: char) -> AnalysisResult<usize> {
    if !letter.is_ascii_alphabetic() {
        return Err(AnalysisError::NotALetter(letter));
    }

    let anchor = LetterCase::of(letter).anchor();
    Ok((letter as u8 - anchor) as usize)
}

/// Converts an index in the range 0..26 back into a letter of the given case.
///
/// # Errors
///
/// [`AnalysisError::IndexOutOfRange`] if `index` is 26 or more.
pub fn index_to_char(index: usize, case: LetterCase) -> AnalysisResult<char> {
    if index >= ALPHABET_SIZE {
        return Err(AnalysisError::IndexOutOfRange(index));
    }

    Ok((case.anchor() + index as u8) as char)
}

/// Converts every character of `text` to its index.
pub(crate) fn text_to_indices(text: &str) -> AnalysisResult<Vec<usize>> {
    text.chars().map(char_to_index).collect()
}

/// Converts indices (already reduced modulo 26) into a string of the given case.
pub(crate) fn indices_to_text<I: IntoIterator<Item = usize>>(
    indices: I,
    case: LetterCase,
) -> AnalysisResult<String> {
    indices
        .into_iter()
        .map(|index| index_to_char(index, case))
        .collect()
}
