//! Devanagari-to-Preeti glyph substitution.
//!
//! The table maps single code points and conjunct clusters to the characters
//! a Preeti font renders as the matching glyph. Substitution is a single
//! left-to-right pass that tries the longest key first at every position, so
//! a ligature such as `क्ष` is never split into `क`, `्`, `ष`, and output text
//! is never fed back into the table.

mod config;
mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_mapping_toml, MappingConfig, MappingConfigError};
pub use table::DEFAULT_TOML;

use crate::reorder::ReorderRule;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default mapping TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// One substitution performed by [`PreetiTable::apply_with`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Substitution {
    pub source: String,
    pub output: String,
}

pub struct PreetiTable {
    entries: HashMap<String, String>,
    /// Longest key, in chars.
    max_key_len: usize,
    rule: ReorderRule,
}

impl PreetiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        // Validate eagerly
        parse_mapping_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MappingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PreetiTable {
        static INSTANCE: OnceLock<PreetiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let config = parse_mapping_toml(toml_str).expect("mapping TOML must be valid");
            PreetiTable::from_config(config)
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, MappingConfigError> {
        parse_mapping_toml(toml_str).map(Self::from_config)
    }

    pub fn from_config(config: MappingConfig) -> Self {
        let max_key_len = config
            .mappings
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            entries: config.mappings.into_iter().collect(),
            max_key_len,
            rule: config.reorder,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn reorder_rule(&self) -> &ReorderRule {
        &self.rule
    }

    /// Substitute every mapped key in `text`. Unmapped characters are copied
    /// through unchanged.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, |_, _| {})
    }

    /// Like [`apply`](Self::apply), calling `on_match(source, output)` for
    /// each substitution in order.
    pub fn apply_with(&self, text: &str, mut on_match: impl FnMut(&str, &str)) -> String {
        // Byte offset of every char boundary, including the end of the string
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < char_count {
            let longest = self.max_key_len.min(char_count - i);
            let hit = (1..=longest).rev().find_map(|len| {
                let key = &text[bounds[i]..bounds[i + len]];
                self.entries.get(key).map(|value| (len, key, value))
            });
            match hit {
                Some((len, key, value)) => {
                    out.push_str(value);
                    on_match(key, value);
                    i += len;
                }
                None => {
                    out.push_str(&text[bounds[i]..bounds[i + 1]]);
                    i += 1;
                }
            }
        }

        out
    }

    /// Apply and collect the substitutions performed.
    pub fn apply_traced(&self, text: &str) -> (String, Vec<Substitution>) {
        let mut steps = Vec::new();
        let out = self.apply_with(text, |source, output| {
            steps.push(Substitution {
                source: source.to_string(),
                output: output.to_string(),
            });
        });
        (out, steps)
    }
}
