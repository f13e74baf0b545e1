//! Reference frequency tables are plain text, one letter per line:
//!
//! ```text
//! a 0.08167
//! b 0.01492
//! ...
//! z 0.00074
//! ```
//!
//! The first token is either the letter or its 0-based index, and must agree with the line's
//! position in the table. The second token is the letter's relative frequency, which must be
//! strictly positive. Blank lines are ignored; anything after the second token is ignored.

use crate::analysis::alphabet::{char_to_index, ALPHABET_SIZE};
use crate::analysis::frequency::Distribution;
use crate::api::enums::error_kind::ErrorKind;
use std::path::Path;
use thiserror_no_std::Error;

/// Errors raised while reading a reference frequency table.
///
/// Line numbers are 1-based and count blank lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceTableError {
    #[error("Reference table has {0} entries, expected 26")]
    WrongLineCount(usize),

    #[error("Line {0} has no frequency value")]
    MissingFrequency(usize),

    #[error("Line {line} has an unparsable frequency value {token:?}")]
    UnparsableFrequency { line: usize, token: String },

    /// Zero (or negative) entries would be used as a chi-squared divisor.
    #[error("Line {0} has a frequency that is not strictly positive")]
    NonPositiveFrequency(usize),

    #[error("Line {line} is labelled {label:?}, which does not match its position in the table")]
    LabelMismatch { line: usize, label: String },

    /// The table could not be read from disk.
    #[error("Failed to read reference table: {0}")]
    FailedToRead(String),
}

impl ReferenceTableError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedReferenceTable
    }
}

/// Parses a reference frequency table from its textual form.
pub fn parse_reference_table(input: &str) -> Result<Distribution, ReferenceTableError> {
    let entries: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    if entries.len() != ALPHABET_SIZE {
        return Err(ReferenceTableError::WrongLineCount(entries.len()));
    }

    let mut values = [0.0; ALPHABET_SIZE];
    for (index, (line, text)) in entries.into_iter().enumerate() {
        let mut tokens = text.split_whitespace();
        let label = tokens.next().unwrap_or_default();
        if !label_matches(label, index) {
            return Err(ReferenceTableError::LabelMismatch {
                line,
                label: label.to_string(),
            });
        }

        let token = tokens
            .next()
            .ok_or(ReferenceTableError::MissingFrequency(line))?;
        let value: f64 = token
            .parse()
            .map_err(|_| ReferenceTableError::UnparsableFrequency {
                line,
                token: token.to_string(),
            })?;

        if !value.is_finite() || value <= 0.0 {
            return Err(ReferenceTableError::NonPositiveFrequency(line));
        }

        values[index] = value;
    }

    Ok(Distribution::new(values))
}

/// Reads and parses a reference frequency table from a file.
pub fn load_reference_table(path: impl AsRef<Path>) -> Result<Distribution, ReferenceTableError> {
    let input = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ReferenceTableError::FailedToRead(e.to_string()))?;
    parse_reference_table(&input)
}

/// Formats a distribution in the reference table format, labelled with lowercase letters.
pub fn format_reference_table(distribution: &Distribution) -> String {
    ('a'..='z')
        .zip(distribution.iter())
        .map(|(letter, value)| format!("{} {}\n", letter, value))
        .collect()
}

/// Checks whether the first token of a line names the letter at `index`.
fn label_matches(label: &str, index: usize) -> bool {
    let mut characters = label.chars();
    match (characters.next(), characters.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => char_to_index(letter) == Ok(index),
        _ => label.parse::<usize>() == Ok(index),
    }
}
