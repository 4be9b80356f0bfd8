//! UniFFI export layer: the host-facing API of the Preeti engine.
//!
//! Each public type here maps to a generated foreign-language class, record,
//! or enum.

mod session;
mod types;

pub use session::PreetiSession;
pub use types::{
    PreetiError, PreetiSnapshot, PreetiTranscriptSegment, PreetiVoiceCommand, PreetiVoiceError,
    PreetiVoiceStatus,
};

use std::path::Path;

use preeti_core::mapping::PreetiTable;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Transcode Devanagari Unicode text to the Preeti encoding.
#[uniffi::export]
fn unicode_to_preeti(text: String) -> String {
    preeti_core::transcode(&text)
}

#[uniffi::export]
fn normalize_biram(text: String) -> String {
    preeti_core::biram::fix_biram(&text)
}

#[uniffi::export]
fn mapping_load_config(path: String) -> Result<(), PreetiError> {
    let content = std::fs::read_to_string(&path).map_err(|e| PreetiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    PreetiTable::init_custom(content).map_err(|e| PreetiError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), PreetiError> {
    let content = std::fs::read_to_string(&path).map_err(|e| PreetiError::Io {
        msg: format!("{path}: {e}"),
    })?;
    preeti_core::settings::init_custom(content)
        .map_err(|e| PreetiError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn mapping_default_config() -> String {
    preeti_core::mapping::default_toml().to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    preeti_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

/// Language tag the host should hand to its speech recognizer.
#[uniffi::export]
fn voice_language() -> String {
    preeti_core::settings::settings().voice.lang.clone()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
