//! # Vigenère Breaker
//! Classical cryptanalysis of Caesar and Vigenère ciphers using nothing but
//! the statistical distribution of letters in natural language text.
//!
//! The high level entry points live in [`api::cracking`]; the individual
//! statistical building blocks live in [`analysis`].

/// Public High Level API
pub mod api {
    pub mod enums {
        pub mod error_kind;
        pub mod letter_case;
    }

    /// Tunables for a cracking attempt.
    pub mod crack_settings;

    /// The operations exposed to drivers and command line tools.
    pub mod cracking;
}

/// This module contains the cryptanalysis engine itself.
///
/// Every function here is pure: it takes immutable text and returns a freshly
/// computed value, failing fast on any precondition violation.
pub mod analysis {
    /// Mapping between letters and their 0..26 index.
    pub mod alphabet;

    /// Errors raised by the cryptanalysis engine.
    pub mod analysis_error;

    /// Single shift substitution, and breaking it via chi-squared.
    pub mod caesar;

    /// Index of coincidence between two texts.
    pub mod coincidence;

    /// Variance based 'flatness' measurements of ciphertexts.
    pub mod flatness;

    /// Letter frequency distributions and the statistics over them.
    pub mod frequency;

    /// Estimating the period of a polyalphabetic cipher.
    pub mod key_length;

    /// Vigenère encryption, decryption and key recovery.
    pub mod vigenere;
}

/// Reference letter frequency tables that ciphertexts are scored against.
pub mod reference {
    /// Built in table for the English language.
    pub mod english;

    /// Parser for the textual reference table format.
    pub mod reference_table;
}

pub mod prelude;

pub mod utilities {
    #[cfg(test)]
    pub mod tests {
        pub mod corpus;
        pub mod letter_text;
    }
}
