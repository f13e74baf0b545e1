/// The case in which letters are emitted.
///
/// # Remarks
///
/// Every transformation in this crate emits all of its output in a single case,
/// which is derived from the first character of its input. Mixed case input
/// does not round trip case per character.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum LetterCase {
    /// Emit 'a' through 'z'.
    #[default]
    Lower,

    /// Emit 'A' through 'Z'.
    Upper,
}

impl LetterCase {
    /// Returns the case of the given character.
    /// Anything which is not an uppercase letter counts as lowercase.
    pub fn of(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            LetterCase::Upper
        } else {
            LetterCase::Lower
        }
    }

    /// Returns the case of the first character of `text`, or [`None`] if the text is empty.
    pub fn of_first(text: &str) -> Option<Self> {
        text.chars().next().map(Self::of)
    }

    /// Returns true if letters should be emitted in uppercase.
    pub fn is_upper(self) -> bool {
        self == LetterCase::Upper
    }

    /// The letter with index 0 in this case.
    pub(crate) fn anchor(self) -> u8 {
        if self.is_upper() {
            b'A'
        } else {
            b'a'
        }
    }
}
