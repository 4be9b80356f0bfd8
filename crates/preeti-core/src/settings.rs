//! Global settings loaded from TOML, following the same OnceLock pattern as the mapping table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub transliteration: TransliterationSettings,
    pub input: InputSettings,
    pub voice: VoiceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransliterationSettings {
    pub endpoint: String,
    /// Input tool code, e.g. `ne-t-i0-und` for Nepali.
    pub input_tool: String,
    pub num: u32,
    pub chunk_size: usize,
    pub timeout_ms: u64,
}

impl TransliterationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub debounce_ms: u64,
}

impl InputSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoiceSettings {
    /// BCP 47 language tag handed to the speech recognizer.
    pub lang: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(transliteration.endpoint);
    check_non_empty!(transliteration.input_tool);
    check_positive!(transliteration.num);
    check_positive!(transliteration.chunk_size);
    check_positive!(transliteration.timeout_ms);

    check_non_empty!(voice.lang);

    // debounce_ms = 0 is allowed: transliterate on every keystroke

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_section(section: &str, body: &str) -> String {
        let base = [
            (
                "transliteration",
                "endpoint = \"https://example.test/request\"\ninput_tool = \"ne-t-i0-und\"\nnum = 1\nchunk_size = 10\ntimeout_ms = 5000\n",
            ),
            ("input", "debounce_ms = 500\n"),
            ("voice", "lang = \"ne-NP\"\n"),
        ];
        base.iter()
            .map(|(name, default_body)| {
                let b = if *name == section { body } else { *default_body };
                format!("[{name}]\n{b}\n")
            })
            .collect()
    }

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(
            s.transliteration.endpoint,
            "https://inputtools.google.com/request"
        );
        assert_eq!(s.transliteration.input_tool, "ne-t-i0-und");
        assert_eq!(s.transliteration.num, 1);
        assert_eq!(s.transliteration.chunk_size, 10);
        assert_eq!(s.transliteration.timeout(), Duration::from_secs(5));
        assert_eq!(s.input.debounce(), Duration::from_millis(500));
        assert_eq!(s.voice.lang, "ne-NP");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = with_section("input", "debounce_ms = 0\n");
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.input.debounce_ms, 0);
        assert_eq!(s.transliteration.endpoint, "https://example.test/request");
    }

    #[test]
    fn error_zero_chunk_size() {
        let toml = with_section(
            "transliteration",
            "endpoint = \"https://example.test\"\ninput_tool = \"ne-t-i0-und\"\nnum = 1\nchunk_size = 0\ntimeout_ms = 5000\n",
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("transliteration.chunk_size"));
    }

    #[test]
    fn error_empty_endpoint() {
        let toml = with_section(
            "transliteration",
            "endpoint = \"  \"\ninput_tool = \"ne-t-i0-und\"\nnum = 1\nchunk_size = 10\ntimeout_ms = 5000\n",
        );
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("transliteration.endpoint"));
    }

    #[test]
    fn error_empty_voice_lang() {
        let toml = with_section("voice", "lang = \"\"\n");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("voice.lang"));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[input]\ndebounce_ms = 500\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_negative_debounce() {
        let toml = with_section("input", "debounce_ms = -1\n");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
