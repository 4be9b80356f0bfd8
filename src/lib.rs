//! Preeti engine: embeddable conversion API around `preeti-core`.
//!
//! Re-exports the transcoder and session crates and adds what a host app
//! needs on top: the UniFFI export layer, the debounced transliteration
//! worker and the Google Input Tools client.

uniffi::setup_scaffolding!();

pub mod api;
mod async_worker;
pub mod input_tools;
mod trace_init;

// Re-export core modules so `preeti_engine::mapping` etc. keep working
pub use preeti_core::{biram, devanagari, mapping, reorder, settings, translit};
pub use preeti_core::{explain, transcode, transcode_with, TranscodeTrace};

// Re-export session
pub use preeti_session as session;
