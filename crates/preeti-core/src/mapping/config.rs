use std::collections::BTreeMap;

use serde::Deserialize;

use crate::devanagari::is_devanagari;
use crate::reorder::ReorderRule;

#[derive(Deserialize)]
struct RawMappingConfig {
    mappings: BTreeMap<String, String>,
    #[serde(default)]
    reorder: Option<RawReorder>,
}

#[derive(Deserialize)]
struct RawReorder {
    sign: String,
    prefix: String,
}

/// Validated mapping configuration.
#[derive(Debug, Clone)]
pub struct MappingConfig {
    pub mappings: BTreeMap<String, String>,
    pub reorder: ReorderRule,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-Devanagari key: {0:?}")]
    NonDevanagariKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("reorder sign must be a single Devanagari character, got {0:?}")]
    InvalidReorderSign(String),
    #[error("reorder prefix is empty")]
    EmptyReorderPrefix,
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate mapping TOML. A missing `[reorder]` table falls back to
/// the i-kar rule.
pub fn parse_mapping_toml(toml_str: &str) -> Result<MappingConfig, MappingConfigError> {
    let raw: RawMappingConfig =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    if raw.mappings.is_empty() {
        return Err(MappingConfigError::Empty);
    }

    for (key, value) in &raw.mappings {
        if key.is_empty() || !key.chars().all(is_devanagari) {
            return Err(MappingConfigError::NonDevanagariKey(key.clone()));
        }
        if value.is_empty() {
            return Err(MappingConfigError::EmptyValue(key.clone()));
        }
    }

    let reorder = match raw.reorder {
        Some(r) => {
            let mut chars = r.sign.chars();
            let sign = match (chars.next(), chars.next()) {
                (Some(c), None) if is_devanagari(c) => c,
                _ => return Err(MappingConfigError::InvalidReorderSign(r.sign)),
            };
            if r.prefix.is_empty() {
                return Err(MappingConfigError::EmptyReorderPrefix);
            }
            ReorderRule {
                sign,
                prefix: r.prefix,
            }
        }
        None => ReorderRule::default(),
    };

    Ok(MappingConfig {
        mappings: raw.mappings,
        reorder,
    })
}
