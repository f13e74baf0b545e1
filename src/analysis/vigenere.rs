use super::alphabet::{index_to_char, indices_to_text, text_to_indices, ALPHABET_SIZE};
use super::analysis_error::{AnalysisError, AnalysisResult};
use super::caesar::find_shift;
use super::frequency::Distribution;
use super::key_length::estimate_key_length;
use crate::api::enums::letter_case::LetterCase;
use derive_new::new;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A Vigenère key recovered from ciphertext alone.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct CrackedKey {
    /// The estimated key length. Always equal to the number of letters in [`Self::key`].
    pub key_length: usize,

    /// The recovered key.
    pub key: String,
}

impl CrackedKey {
    /// Decrypts `ciphertext` with the recovered key.
    pub fn decrypt(&self, ciphertext: &str) -> AnalysisResult<String> {
        decrypt(ciphertext, &self.key)
    }
}

/// Encrypts `plaintext` with `key`, shifting the letter at position `i` forward by the
/// index of key letter `i % key.len()`.
///
/// # Remarks
///
/// All output letters take the case of the first character of `plaintext`.
/// Key letters are case insensitive.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `plaintext` is empty.
/// - [`AnalysisError::EmptyKey`] if `key` is empty.
/// - [`AnalysisError::NotALetter`] if either text contains anything but ASCII letters.
pub fn encrypt(plaintext: &str, key: &str) -> AnalysisResult<String> {
    apply_key(plaintext, key, |letter, shift| letter + shift)
}

/// Decrypts `ciphertext` with `key`; the inverse of [`encrypt`].
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> AnalysisResult<String> {
    apply_key(ciphertext, key, |letter, shift| letter + ALPHABET_SIZE - shift)
}

fn apply_key(
    text: &str,
    key: &str,
    combine: impl Fn(usize, usize) -> usize,
) -> AnalysisResult<String> {
    let case = LetterCase::of_first(text).ok_or(AnalysisError::EmptyInput)?;
    let shifts = text_to_indices(key)?;
    if shifts.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }

    let letters = text_to_indices(text)?;
    indices_to_text(
        letters
            .into_iter()
            .zip(shifts.iter().cycle())
            .map(|(letter, &shift)| combine(letter, shift) % ALPHABET_SIZE),
        case,
    )
}

/// Splits `ciphertext` into `key_length` interleaved sub-streams.
///
/// Sub-stream `k` holds the characters at positions `k, k + key_length, k + 2 * key_length, ...`,
/// all of which were encrypted with the same key letter; each sub-stream is therefore a
/// Caesar cipher on its own.
///
/// # Errors
///
/// [`AnalysisError::ZeroKeyLength`] if `key_length` is 0.
pub fn decompose(ciphertext: &str, key_length: usize) -> AnalysisResult<Vec<String>> {
    if key_length == 0 {
        return Err(AnalysisError::ZeroKeyLength);
    }

    Ok((0..key_length)
        .map(|offset| ciphertext.chars().skip(offset).step_by(key_length).collect())
        .collect())
}

/// Recovers the key of a Vigenère ciphertext.
///
/// The key length is estimated with [`estimate_key_length`], the ciphertext is split with
/// [`decompose`] and every sub-stream is broken with [`find_shift`].
/// Key letters are emitted in the case of the first ciphertext character.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `ciphertext` is empty.
/// - Any error of [`estimate_key_length`] or [`find_shift`].
pub fn crack(
    ciphertext: &str,
    expected: &Distribution,
    upper_bound: usize,
) -> AnalysisResult<CrackedKey> {
    let case = LetterCase::of_first(ciphertext).ok_or(AnalysisError::EmptyInput)?;
    crack_in_case(ciphertext, expected, upper_bound, case)
}

/// Same as [`crack`], but emits the key letters in the given case.
pub fn crack_in_case(
    ciphertext: &str,
    expected: &Distribution,
    upper_bound: usize,
    case: LetterCase,
) -> AnalysisResult<CrackedKey> {
    if ciphertext.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let key_length = estimate_key_length(ciphertext, upper_bound)?;
    let streams = decompose(ciphertext, key_length)?;

    #[cfg(feature = "parallel")]
    let shifts = streams
        .par_iter()
        .map(|stream| stream_shift(stream, expected))
        .collect::<AnalysisResult<Vec<usize>>>()?;

    #[cfg(not(feature = "parallel"))]
    let shifts = streams
        .iter()
        .map(|stream| stream_shift(stream, expected))
        .collect::<AnalysisResult<Vec<usize>>>()?;

    // find_shift yields the decoding rotation; the key letter is the encoding one.
    let key = shifts
        .iter()
        .map(|&shift| index_to_char((ALPHABET_SIZE - shift) % ALPHABET_SIZE, case))
        .collect::<AnalysisResult<String>>()?;

    tracing::info!(key_length, key = %key, "cracked vigenère key");
    Ok(CrackedKey::new(key_length, key))
}

/// Breaks a single sub-stream. Streams left empty (ciphertext shorter than the key length)
/// carry no information and decode with a shift of 0.
fn stream_shift(stream: &str, expected: &Distribution) -> AnalysisResult<usize> {
    if stream.is_empty() {
        return Ok(0);
    }

    let shift = find_shift(stream, expected)?;
    tracing::debug!(length = stream.len(), shift, "recovered sub-stream shift");
    Ok(shift)
}
