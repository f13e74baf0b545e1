use crate::analysis::alphabet::ALPHABET_SIZE;
use crate::analysis::analysis_error::AnalysisResult;
use crate::analysis::frequency::{self, Distribution};
use crate::analysis::{caesar, vigenere};
use crate::api::crack_settings::CrackSettings;

pub use crate::analysis::vigenere::CrackedKey;

/// Recovers the shift a Caesar ciphertext was encrypted with.
///
/// # Parameters
///
/// * `ciphertext`: Text encrypted with a single shift. Letters only.
/// * `reference`: Letter distribution of the plaintext language.
///
/// # Returns
///
/// The *encryption* shift, i.e. `crack_caesar_shift(rot(plaintext, 5)) == 5`.
/// This equals the index of the single key letter of an equivalent Vigenère key.
pub fn crack_caesar_shift(ciphertext: &str, reference: &Distribution) -> AnalysisResult<usize> {
    let decoding_shift = caesar::find_shift(ciphertext, reference)?;
    Ok((ALPHABET_SIZE - decoding_shift) % ALPHABET_SIZE)
}

/// Recovers the key length and key a Vigenère ciphertext was encrypted with.
///
/// # Parameters
///
/// * `ciphertext`: Text encrypted with a Vigenère key. Letters only.
/// * `reference`: Letter distribution of the plaintext language.
/// * `key_length_upper_bound`: Exclusive upper bound of the key lengths considered.
pub fn crack_vigenere_key(
    ciphertext: &str,
    reference: &Distribution,
    key_length_upper_bound: usize,
) -> AnalysisResult<CrackedKey> {
    vigenere::crack(ciphertext, reference, key_length_upper_bound)
}

/// Recovers the key of a Vigenère ciphertext according to the given settings.
///
/// # Remarks
///
/// Settings are used as given; call [`CrackSettings::sanitize`] beforehand to clamp them.
pub fn crack_vigenere(ciphertext: &str, settings: &CrackSettings) -> AnalysisResult<CrackedKey> {
    match settings.output_case {
        Some(case) => vigenere::crack_in_case(
            ciphertext,
            &settings.reference,
            settings.key_length_upper_bound,
            case,
        ),
        None => vigenere::crack(
            ciphertext,
            &settings.reference,
            settings.key_length_upper_bound,
        ),
    }
}

/// Encrypts `plaintext` with a Vigenère `key`.
/// Output takes the case of the first plaintext character.
pub fn encrypt_vigenere(plaintext: &str, key: &str) -> AnalysisResult<String> {
    vigenere::encrypt(plaintext, key)
}

/// Decrypts `ciphertext` with a Vigenère `key`.
/// Output takes the case of the first ciphertext character.
pub fn decrypt_vigenere(ciphertext: &str, key: &str) -> AnalysisResult<String> {
    vigenere::decrypt(ciphertext, key)
}

/// Relative frequency of each letter in `text`.
pub fn letter_frequencies(text: &str) -> AnalysisResult<Distribution> {
    frequency::frequencies(text)
}

/// Chi-squared statistic of `observed` against `expected`; lower is a closer fit.
pub fn chi_squared(observed: &Distribution, expected: &Distribution) -> AnalysisResult<f64> {
    frequency::chi_squared(observed, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analysis_error::AnalysisError;
    use crate::analysis::caesar::rot;
    use crate::api::enums::error_kind::ErrorKind;
    use crate::api::enums::letter_case::LetterCase;
    use crate::reference::english::ENGLISH;
    use crate::utilities::tests::corpus::{english_letters, PANGRAM_OPENING};
    use rstest::rstest;

    #[rstest]
    fn cracks_caesar_encryption_shift(#[values(0, 3, 5, 17, 25)] shift: usize) {
        let ciphertext = rot(&english_letters(), shift).unwrap();
        assert_eq!(crack_caesar_shift(&ciphertext, &ENGLISH), Ok(shift));
    }

    #[test]
    fn caesar_shift_matches_single_letter_vigenere_key() {
        let ciphertext = encrypt_vigenere(&english_letters(), "h").unwrap();
        assert_eq!(crack_caesar_shift(&ciphertext, &ENGLISH), Ok(7));
    }

    #[test]
    fn cracks_pangram_led_text_end_to_end() {
        let plaintext = english_letters();
        assert!(plaintext.starts_with(PANGRAM_OPENING));

        let ciphertext = encrypt_vigenere(&plaintext, "fox").unwrap();
        let cracked = crack_vigenere_key(&ciphertext, &ENGLISH, 10).unwrap();

        assert_eq!(cracked.key_length, 3);
        assert_eq!(cracked.key, "fox");
        assert_eq!(decrypt_vigenere(&ciphertext, &cracked.key).unwrap(), plaintext);
    }

    #[test]
    fn key_with_bigram_aligned_letters_is_taken_for_one_letter() {
        // k->e and e->y both step by 6, lining up common bigrams at lag 1.
        let plaintext = english_letters();
        let ciphertext = encrypt_vigenere(&plaintext, "key").unwrap();
        let cracked = crack_vigenere_key(&ciphertext, &ENGLISH, 10).unwrap();

        assert_eq!(cracked, CrackedKey::new(1, "k".to_string()));
        assert_ne!(cracked.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn cracks_with_default_settings() {
        let ciphertext = encrypt_vigenere(&english_letters(), "uvwxyz").unwrap();
        let cracked = crack_vigenere(&ciphertext, &CrackSettings::new()).unwrap();
        assert_eq!(cracked, CrackedKey::new(6, "uvwxyz".to_string()));
    }

    #[test]
    fn settings_override_key_case() {
        let ciphertext = encrypt_vigenere(&english_letters(), "uvwxyz").unwrap();
        let mut settings = CrackSettings::new();
        settings.output_case = Some(LetterCase::Upper);

        assert_eq!(crack_vigenere(&ciphertext, &settings).unwrap().key, "UVWXYZ");
    }

    #[test]
    fn unsanitized_settings_are_rejected() {
        let mut settings = CrackSettings::new();
        settings.key_length_upper_bound = 1;
        assert_eq!(
            crack_vigenere("abcdef", &settings),
            Err(AnalysisError::KeyLengthUpperBoundTooSmall(1))
        );
    }

    #[rstest]
    #[case::empty_frequencies(letter_frequencies("").unwrap_err(), ErrorKind::EmptyInput)]
    #[case::not_a_letter(
        crate::analysis::alphabet::char_to_index('5').unwrap_err(),
        ErrorKind::InvalidInput
    )]
    #[case::mismatch(
        crate::analysis::coincidence::index_of_coincidence("abc", "ab").unwrap_err(),
        ErrorKind::LengthMismatch
    )]
    fn boundary_errors_have_expected_kind(#[case] error: AnalysisError, #[case] kind: ErrorKind) {
        assert_eq!(error.kind(), kind);
    }

    #[test]
    fn chi_squared_of_frequencies_against_self_is_zero() {
        let observed = letter_frequencies(&english_letters()).unwrap();
        assert_eq!(chi_squared(&observed, &observed), Ok(0.0));
    }
}
