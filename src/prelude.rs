pub use crate::analysis::alphabet::{char_to_index, index_to_char, ALPHABET_SIZE};
pub use crate::analysis::analysis_error::{AnalysisError, AnalysisResult};
pub use crate::analysis::frequency::Distribution;
pub use crate::analysis::vigenere::CrackedKey;

pub use crate::api::crack_settings::*;
pub use crate::api::cracking::*;
pub use crate::api::enums::error_kind::ErrorKind;
pub use crate::api::enums::letter_case::LetterCase;

pub use crate::reference::english::ENGLISH;
pub use crate::reference::reference_table::{
    format_reference_table, load_reference_table, parse_reference_table, ReferenceTableError,
};
