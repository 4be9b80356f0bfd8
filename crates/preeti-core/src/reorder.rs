//! Visual reordering of the i-kar sign.
//!
//! Unicode stores `ि` after the consonant it belongs to, but the Preeti
//! encoding types its glyph before the consonant (or before the whole
//! conjunct when the consonant is half-formed with a virama). Two patterns
//! are rewritten, the longer one first:
//!
//! 1. `C ् C ि` → `prefix C ् C`
//! 2. `C ि`     → `prefix C`
//!
//! Matching is leftmost and non-overlapping: after a rewrite the scan resumes
//! past the consumed span.

use crate::devanagari::{is_consonant, SIGN_I, VIRAMA};

/// Default Preeti glyph for the i-kar sign.
pub const DEFAULT_PREFIX: &str = "l";

/// A dependent vowel sign that must be moved in front of its consonant(s),
/// and the glyph written in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderRule {
    pub sign: char,
    pub prefix: String,
}

impl Default for ReorderRule {
    fn default() -> Self {
        Self {
            sign: SIGN_I,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Apply `rule` to `text`, returning the reordered string.
///
/// Must run before glyph substitution: once consonants are substituted the
/// patterns are no longer recognizable.
pub fn reorder(text: &str, rule: &ReorderRule) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_consonant(c) {
            // Conjunct: C + virama + C + sign
            if chars.get(i + 1) == Some(&VIRAMA)
                && chars.get(i + 2).is_some_and(|&d| is_consonant(d))
                && chars.get(i + 3) == Some(&rule.sign)
            {
                out.push_str(&rule.prefix);
                out.push(c);
                out.push(VIRAMA);
                out.push(chars[i + 2]);
                i += 4;
                continue;
            }
            if chars.get(i + 1) == Some(&rule.sign) {
                out.push_str(&rule.prefix);
                out.push(c);
                i += 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule() -> ReorderRule {
        ReorderRule::default()
    }

    #[test]
    fn test_single_consonant() {
        assert_eq!(reorder("कि", &rule()), "lक");
        assert_eq!(reorder("दिन", &rule()), "lदन");
    }

    #[test]
    fn test_conjunct_moves_before_cluster() {
        // क्षि: prefix goes before the whole conjunct, not between its halves
        assert_eq!(reorder("क्षि", &rule()), "lक्ष");
        assert_eq!(reorder("स्थिति", &rule()), "lस्थlत");
    }

    #[test]
    fn test_non_overlapping_runs() {
        assert_eq!(reorder("किकि", &rule()), "lकlक");
        assert_eq!(reorder("किताब", &rule()), "lकताब");
    }

    #[test]
    fn test_sign_without_consonant_untouched() {
        // After an independent vowel or at string start there is nothing to move
        assert_eq!(reorder("ि", &rule()), "ि");
        assert_eq!(reorder("अि", &rule()), "अि");
    }

    #[test]
    fn test_other_signs_untouched() {
        assert_eq!(reorder("की", &rule()), "की");
        assert_eq!(reorder("का", &rule()), "का");
        assert_eq!(reorder("क्", &rule()), "क्");
    }

    #[test]
    fn test_passthrough_ascii() {
        assert_eq!(reorder("", &rule()), "");
        assert_eq!(reorder("hello, world", &rule()), "hello, world");
    }

    #[test]
    fn test_custom_rule() {
        let r = ReorderRule {
            sign: 'ी',
            prefix: "X".to_string(),
        };
        assert_eq!(reorder("की", &r), "Xक");
        assert_eq!(reorder("कि", &r), "कि");
    }

    proptest! {
        #[test]
        fn consonant_plus_sign_keeps_length(c in 0x0915u32..=0x0939u32) {
            let consonant = char::from_u32(c).unwrap();
            let input: String = [consonant, SIGN_I].iter().collect();
            let out = reorder(&input, &rule());
            prop_assert_eq!(out.chars().count(), input.chars().count());
            prop_assert_eq!(out, format!("l{consonant}"));
        }
    }
}
