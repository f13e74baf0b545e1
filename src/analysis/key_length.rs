use super::analysis_error::{AnalysisError, AnalysisResult};
use super::coincidence::{index_of_coincidence, rotate_positions};

/// Estimates the key length of a polyalphabetic cipher.
///
/// Each candidate length `L` in `[1, upper_bound)` is scored by the index of coincidence
/// between `ciphertext` and `ciphertext` rotated by `L` positions. When `L` is a multiple
/// of the true key length, aligned letters were encrypted with the same key letter,
/// so coincidences of the plaintext survive and the index peaks.
///
/// # Remarks
///
/// `upper_bound` itself is never tested. On ties, the shortest length wins.
///
/// Results on short ciphertexts are statistically unreliable but are still returned.
///
/// # Errors
///
/// - [`AnalysisError::KeyLengthUpperBoundTooSmall`] if `upper_bound` is less than 2.
/// - Any error of [`index_of_coincidence`], e.g. [`AnalysisError::TextTooShort`].
pub fn estimate_key_length(ciphertext: &str, upper_bound: usize) -> AnalysisResult<usize> {
    if upper_bound < 2 {
        return Err(AnalysisError::KeyLengthUpperBoundTooSmall(upper_bound));
    }

    if ciphertext.len() < upper_bound {
        tracing::warn!(
            length = ciphertext.len(),
            upper_bound,
            "ciphertext is shorter than the key length upper bound; estimate is unreliable"
        );
    }

    let mut best_length = 1;
    let mut highest = f64::NEG_INFINITY;
    for length in 1..upper_bound {
        let rotated = rotate_positions(ciphertext, length);
        let index = index_of_coincidence(ciphertext, &rotated)?;
        tracing::debug!(length, index, "scored key length candidate");

        if index > highest {
            highest = index;
            best_length = length;
        }
    }

    Ok(best_length)
}
