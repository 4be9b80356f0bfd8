//! Purna biram normalization: ASCII full stop → Devanagari danda.
//!
//! Applied twice in a full conversion: once on the Romanized text before it
//! is sent for transliteration, and once on the Unicode text before
//! reordering. Both call sites are required.

use crate::devanagari::DANDA;

/// Replace every `.` with `।`. All other characters pass through unchanged.
pub fn fix_biram(text: &str) -> String {
    text.chars()
        .map(|c| if c == '.' { DANDA } else { c })
        .collect()
}
