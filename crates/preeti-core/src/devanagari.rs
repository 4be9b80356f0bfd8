//! Character-level Unicode classification for Devanagari text.

/// Virama (halant). Suppresses the inherent vowel and joins consonants.
pub const VIRAMA: char = '\u{094D}';

/// Dependent vowel sign I (i-kar), the only sign the legacy encoding
/// places before its consonant.
pub const SIGN_I: char = '\u{093F}';

/// Danda, the Devanagari full stop (purna biram).
pub const DANDA: char = '\u{0964}';

/// Check the full Devanagari block (U+0900..U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Base consonants क..ह (U+0915..U+0939). Nukta forms and the extended
/// consonants of U+0958..U+095F are intentionally excluded.
pub fn is_consonant(c: char) -> bool {
    ('\u{0915}'..='\u{0939}').contains(&c)
}

/// Dependent vowel signs ा..ौ plus the later additions up to U+094C.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{093E}'..='\u{094C}').contains(&c)
}

pub fn is_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

/// Check if a string contains any Devanagari code point.
pub fn contains_devanagari(s: &str) -> bool {
    s.chars().any(is_devanagari)
}
