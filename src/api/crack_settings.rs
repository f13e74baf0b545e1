use crate::analysis::frequency::Distribution;
use crate::api::enums::letter_case::LetterCase;
use crate::reference::english::ENGLISH;

/// The key length upper bound used when none is specified.
/// Keys longer than this are unlikely in practice.
pub const DEFAULT_KEY_LENGTH_UPPER_BOUND: usize = 10;

/// The minimum key length upper bound the user is allowed to specify.
/// The bound is exclusive, so this leaves key length 1 as the only candidate.
pub const MIN_KEY_LENGTH_UPPER_BOUND: usize = 2;

/// The maximum key length upper bound the user is allowed to specify.
pub const MAX_KEY_LENGTH_UPPER_BOUND: usize = 64;

/// Controls the configuration settings of a cracking attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackSettings {
    /// Exclusive upper bound of the key lengths considered.
    ///
    /// Range is [`MIN_KEY_LENGTH_UPPER_BOUND`] to [`MAX_KEY_LENGTH_UPPER_BOUND`].
    /// Key lengths `1..key_length_upper_bound` are tested.
    pub key_length_upper_bound: usize,

    /// Letter distribution of the plaintext language.
    /// Every entry must be strictly positive.
    pub reference: Distribution,

    /// Case of the recovered key letters.
    ///
    /// If [`None`], the case of the first ciphertext character is used.
    pub output_case: Option<LetterCase>,
}

impl Default for CrackSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl CrackSettings {
    /// Creates new `CrackSettings` with default values, scoring against English.
    pub fn new() -> Self {
        CrackSettings {
            key_length_upper_bound: DEFAULT_KEY_LENGTH_UPPER_BOUND,
            reference: ENGLISH,
            output_case: None,
        }
    }

    /// Creates new `CrackSettings` with default values, scoring against the given language.
    pub fn with_reference(reference: Distribution) -> Self {
        CrackSettings {
            reference,
            ..Self::new()
        }
    }

    /// Sanitizes settings to acceptable values if they are out of range.
    pub fn sanitize(&mut self) {
        self.key_length_upper_bound = self
            .key_length_upper_bound
            .clamp(MIN_KEY_LENGTH_UPPER_BOUND, MAX_KEY_LENGTH_UPPER_BOUND);
    }
}
