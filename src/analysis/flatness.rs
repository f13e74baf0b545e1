//! Measures how 'flat' the letter distribution of a text is.
//!
//! Natural language has a lumpy letter distribution; every additional independent key letter
//! of a polyalphabetic cipher smooths it out. Splitting a ciphertext by the correct key length
//! restores the lumpiness in every sub-stream, which these measurements make visible.

use super::analysis_error::AnalysisResult;
use super::frequency::frequencies;
use super::vigenere::decompose;

/// Population variance of the letter frequencies of `text`.
pub fn frequency_variance(text: &str) -> AnalysisResult<f64> {
    Ok(frequencies(text)?.variance())
}

/// Variance of the letter frequencies of each sub-stream, as split by [`decompose`].
pub fn substream_variances(text: &str, key_length: usize) -> AnalysisResult<Vec<f64>> {
    decompose(text, key_length)?
        .iter()
        .map(|stream| frequency_variance(stream))
        .collect()
}

/// Mean of [`substream_variances`] when `text` is assumed to have a key of `assumed_length`.
pub fn mean_substream_variance(text: &str, assumed_length: usize) -> AnalysisResult<f64> {
    let variances = substream_variances(text, assumed_length)?;
    Ok(variances.iter().sum::<f64>() / variances.len() as f64)
}
