const PARAGRAPH: &str = "\
It was a bright cold day in April and the clocks were striking thirteen while the wind swept \
small eddies of dust and torn paper into a spiral along the street outside the old station";

/// Returns `length` lowercase letters of English prose, repeating a fixed paragraph as needed.
pub fn get_english_letters(length: usize) -> String {
    PARAGRAPH
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .cycle()
        .take(length)
        .collect()
}
