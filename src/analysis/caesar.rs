use super::alphabet::{indices_to_text, text_to_indices, ALPHABET_SIZE};
use super::analysis_error::{AnalysisError, AnalysisResult};
use super::frequency::{chi_squared, frequencies, Distribution};
use crate::api::enums::letter_case::LetterCase;

/// Shifts every letter of `text` forward by `shift` places in the alphabet, wrapping around.
///
/// # Remarks
///
/// All output letters take the case of the first character of `text`,
/// regardless of the case of the letter they were produced from.
///
/// This shifts *letters*. To move characters to other positions within the text,
/// see [`rotate_positions`].
///
/// # Errors
///
/// - [`AnalysisError::ShiftOutOfRange`] if `shift` is 26 or more.
/// - [`AnalysisError::EmptyInput`] if `text` is empty.
/// - [`AnalysisError::NotALetter`] if `text` contains anything but ASCII letters.
///
/// [`rotate_positions`]: super::coincidence::rotate_positions
pub fn rot(text: &str, shift: usize) -> AnalysisResult<String> {
    if shift >= ALPHABET_SIZE {
        return Err(AnalysisError::ShiftOutOfRange(shift));
    }

    let case = LetterCase::of_first(text).ok_or(AnalysisError::EmptyInput)?;
    let indices = text_to_indices(text)?;
    indices_to_text(
        indices.into_iter().map(|index| (index + shift) % ALPHABET_SIZE),
        case,
    )
}

/// Finds the shift which, when applied with [`rot`], turns `ciphertext` into the text whose
/// letter distribution fits `expected` best (lowest chi-squared).
///
/// # Remarks
///
/// The returned value is the *decoding* rotation. The shift used to encrypt is
/// `(26 - shift) % 26`.
///
/// On ties, the lowest shift wins.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `ciphertext` is empty.
/// - [`AnalysisError::NotALetter`] if `ciphertext` contains anything but ASCII letters.
/// - [`AnalysisError::ZeroExpectedFrequency`] if `expected` has a zero entry.
pub fn find_shift(ciphertext: &str, expected: &Distribution) -> AnalysisResult<usize> {
    let observed = frequencies(ciphertext)?;

    let mut best_shift = 0;
    let mut lowest = f64::INFINITY;
    for shift in 0..ALPHABET_SIZE {
        // Frequencies of rot(ciphertext, shift), without building the text.
        let decoded = shift_distribution(&observed, shift);
        let score = chi_squared(&decoded, expected)?;
        tracing::trace!(shift, score, "scored caesar shift");

        if score < lowest {
            lowest = score;
            best_shift = shift;
        }
    }

    Ok(best_shift)
}

/// Returns the distribution of a text after each of its letters has been shifted by `shift`.
fn shift_distribution(distribution: &Distribution, shift: usize) -> Distribution {
    let mut values = [0.0; ALPHABET_SIZE];
    for (index, value) in distribution.iter().enumerate() {
        values[(index + shift) % ALPHABET_SIZE] = value;
    }
    Distribution::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::english::ENGLISH;
    use crate::utilities::tests::corpus::english_letters;
    use rstest::rstest;

    #[rstest]
    #[case::zero("abc", 0, "abc")]
    #[case::wraps("xyz", 3, "abc")]
    #[case::upper("HELLO", 13, "URYYB")]
    #[case::first_char_decides_case("Hello", 1, "IFMMP")]
    #[case::lower_first_forces_lower("hELLO", 1, "ifmmp")]
    fn rot_shifts_letters(#[case] text: &str, #[case] shift: usize, #[case] expected: &str) {
        assert_eq!(rot(text, shift).unwrap(), expected);
    }

    #[test]
    fn rot_agrees_with_frequency_shift() {
        let text = english_letters();
        let observed = frequencies(&text).unwrap();
        for shift in 0..ALPHABET_SIZE {
            let rotated = frequencies(&rot(&text, shift).unwrap()).unwrap();
            assert_eq!(shift_distribution(&observed, shift), rotated);
        }
    }

    #[rstest]
    #[case::empty("", 1, AnalysisError::EmptyInput)]
    #[case::digit("ab3", 1, AnalysisError::NotALetter('3'))]
    #[case::shift_too_large("abc", 26, AnalysisError::ShiftOutOfRange(26))]
    fn rot_rejects_bad_input(#[case] text: &str, #[case] shift: usize, #[case] error: AnalysisError) {
        assert_eq!(rot(text, shift), Err(error));
    }

    #[rstest]
    fn finds_decoding_shift_of_english_text(#[values(0, 1, 5, 13, 25)] encrypt_shift: usize) {
        let ciphertext = rot(&english_letters(), encrypt_shift).unwrap();
        let shift = find_shift(&ciphertext, &ENGLISH).unwrap();

        assert_eq!(shift, (ALPHABET_SIZE - encrypt_shift) % ALPHABET_SIZE);
        assert_eq!(rot(&ciphertext, shift).unwrap(), english_letters());
    }

    #[test]
    fn lowest_shift_wins_ties() {
        // Every rotation of the alphabet has the same (uniform) distribution.
        let shift = find_shift("abcdefghijklmnopqrstuvwxyz", &ENGLISH).unwrap();
        assert_eq!(shift, 0);
    }

    #[test]
    fn find_shift_of_empty_text_fails() {
        assert_eq!(find_shift("", &ENGLISH), Err(AnalysisError::EmptyInput));
    }
}
