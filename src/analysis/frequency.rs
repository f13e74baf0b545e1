use super::alphabet::{char_to_index, ALPHABET_SIZE};
use super::analysis_error::{AnalysisError, AnalysisResult};
use core::ops::Index;
use static_assertions::assert_eq_size;

/// Relative frequency of each letter of the alphabet, indexed 0 ('a') to 25 ('z').
///
/// # Remarks
///
/// Empirical distributions produced by [`frequencies`] sum to 1.0.
/// Reference distributions are supplied externally and only approximately sum to 1.0.
///
/// Once built, a distribution is never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Distribution([f64; ALPHABET_SIZE]);

assert_eq_size!(Distribution, [f64; ALPHABET_SIZE]);

impl Distribution {
    /// Wraps raw per-letter frequencies.
    pub const fn new(values: [f64; ALPHABET_SIZE]) -> Self {
        Distribution(values)
    }

    /// Raw per-letter frequencies.
    pub fn values(&self) -> &[f64; ALPHABET_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Population mean of the 26 entries.
    pub fn mean(&self) -> f64 {
        self.sum() / ALPHABET_SIZE as f64
    }

    /// Population variance of the 26 entries.
    ///
    /// A 'flat' distribution (every letter equally likely, as produced by a good
    /// polyalphabetic cipher) has a variance near zero; natural language does not.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / ALPHABET_SIZE as f64
    }
}

impl Index<usize> for Distribution {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Tallies how many times each letter occurs in `text`, case insensitive.
pub(crate) fn letter_counts(text: &str) -> AnalysisResult<[usize; ALPHABET_SIZE]> {
    text.chars().try_fold([0usize; ALPHABET_SIZE], |mut counts, letter| {
        counts[char_to_index(letter)?] += 1;
        Ok(counts)
    })
}

/// Computes the relative frequency of every letter in `text`.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `text` is empty.
/// - [`AnalysisError::NotALetter`] if `text` contains anything but ASCII letters.
pub fn frequencies(text: &str) -> AnalysisResult<Distribution> {
    if text.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let counts = letter_counts(text)?;
    let total = text.len() as f64;
    Ok(Distribution(counts.map(|count| count as f64 / total)))
}

/// Computes the chi-squared statistic of `observed` against `expected`.
///
/// Lower values indicate that `observed` fits `expected` more closely.
///
/// # Errors
///
/// [`AnalysisError::ZeroExpectedFrequency`] if any entry of `expected` is zero.
/// Reference tables must have strictly positive entries; zero entries are not skipped.
pub fn chi_squared(observed: &Distribution, expected: &Distribution) -> AnalysisResult<f64> {
    if let Some(index) = expected.iter().position(|x| x == 0.0) {
        return Err(AnalysisError::ZeroExpectedFrequency(index));
    }

    Ok(observed
        .iter()
        .zip(expected.iter())
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum())
}
