use super::alphabet::{char_to_index, ALPHABET_SIZE};
use super::analysis_error::{AnalysisError, AnalysisResult};

/// Computes the index of coincidence between two texts of equal length.
///
/// Positions where both texts hold the same character are tallied per letter, and the
/// tallies are fed into `26 * Σ count·(count - 1) / (N·(N - 1))`.
///
/// # Remarks
///
/// Characters are compared exactly, so 'a' and 'A' do not coincide.
/// The result always lies within `0..=26`.
///
/// # Errors
///
/// - [`AnalysisError::LengthMismatch`] if the texts differ in length.
/// - [`AnalysisError::TextTooShort`] if the texts have fewer than 2 characters.
/// - [`AnalysisError::NotALetter`] if either text contains anything but ASCII letters.
pub fn index_of_coincidence(text1: &str, text2: &str) -> AnalysisResult<f64> {
    let length = text1.chars().count();
    let other_length = text2.chars().count();
    if length != other_length {
        return Err(AnalysisError::LengthMismatch(length, other_length));
    }

    if length < 2 {
        return Err(AnalysisError::TextTooShort(length));
    }

    let mut matches = [0u64; ALPHABET_SIZE];
    for (a, b) in text1.chars().zip(text2.chars()) {
        let index = char_to_index(a)?;
        char_to_index(b)?;
        if a == b {
            matches[index] += 1;
        }
    }

    let summation: u64 = matches
        .iter()
        .map(|&count| count * count.saturating_sub(1))
        .sum();

    let length = length as f64;
    Ok(ALPHABET_SIZE as f64 * summation as f64 / (length * (length - 1.0)))
}

/// Moves the character at position `i` to position `(i + shift) % N`.
///
/// This rotates *positions* within the text; the letters themselves are unchanged.
/// For shifting letters through the alphabet, see [`rot`].
///
/// [`rot`]: super::caesar::rot
pub fn rotate_positions(text: &str, shift: usize) -> String {
    let mut characters: Vec<char> = text.chars().collect();
    if !characters.is_empty() {
        let amount = shift % characters.len();
        characters.rotate_right(amount);
    }
    characters.into_iter().collect()
}
