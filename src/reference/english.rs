use crate::analysis::frequency::Distribution;

/// Relative letter frequencies of typical English text, 'a' through 'z'.
///
/// Every entry is strictly positive, so this table is safe to use as the expected
/// distribution of a chi-squared test.
pub const ENGLISH: Distribution = Distribution::new([
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, // a - h
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, // i - p
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150, // q - x
    0.01974, 0.00074, // y - z
]);
