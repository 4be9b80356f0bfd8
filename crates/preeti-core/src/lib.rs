//! Devanagari Unicode to Preeti legacy-font transcoder.
//!
//! The pipeline is `biram` → `reorder` → `mapping`, composed by
//! [`transcode::transcode`].

pub mod biram;
pub mod devanagari;
pub mod mapping;
pub mod reorder;
pub mod settings;
pub mod transcode;
pub mod translit;

pub use transcode::{explain, transcode, transcode_with, TranscodeTrace};
