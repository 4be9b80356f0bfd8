//! Converter session: the state behind the Roman, Unicode and Preeti boxes.
//!
//! `ConverterSession` owns the three text buffers and reacts to the three
//! input paths. Romanized typing produces a [`TranslitRequest`] that the host
//! runs asynchronously; the manual convert button re-encodes whatever Unicode
//! text is present; voice results append final transcript segments to the
//! Unicode buffer. Every update of the Unicode buffer by the session is
//! followed by a full re-transcode.

mod types;
mod voice;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use preeti_core::biram::fix_biram;
use preeti_core::transcode;

pub use types::{
    RomanInputResponse, SessionError, TranscriptSegment, TranslitRequest, VoiceCommand,
    VoiceError, VoiceStatus,
};

pub struct ConverterSession {
    roman_input: String,
    unicode_output: String,
    preeti_output: String,
    font_preview: bool,
    voice_status: VoiceStatus,
    /// Bumped on every Roman input change; results tagged with an older
    /// generation are dropped.
    generation: u64,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterSession {
    pub fn new() -> Self {
        Self {
            roman_input: String::new(),
            unicode_output: String::new(),
            preeti_output: String::new(),
            font_preview: false,
            voice_status: VoiceStatus::Off,
            generation: 0,
        }
    }

    pub fn roman_input(&self) -> &str {
        &self.roman_input
    }

    pub fn unicode_output(&self) -> &str {
        &self.unicode_output
    }

    pub fn preeti_output(&self) -> &str {
        &self.preeti_output
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The Roman input box changed.
    pub fn handle_roman_input(&mut self, text: &str) -> RomanInputResponse {
        let _span = debug_span!("handle_roman_input", len = text.len()).entered();
        self.roman_input = text.to_string();
        self.generation += 1;

        let normalized = fix_biram(text);
        if normalized.trim().is_empty() {
            self.unicode_output.clear();
            self.preeti_output.clear();
            return RomanInputResponse::Cleared;
        }
        RomanInputResponse::Transliterate(TranslitRequest {
            text: normalized,
            generation: self.generation,
        })
    }

    /// Deliver a transliteration result. Returns false if it was stale.
    pub fn receive_unicode(&mut self, generation: u64, unicode: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        self.set_unicode_and_transcode(unicode.to_string());
        true
    }

    /// Direct edit of the Unicode box. The Preeti output is left alone until
    /// [`convert`](Self::convert) is called.
    pub fn set_unicode_output(&mut self, text: &str) {
        self.unicode_output = text.to_string();
    }

    /// Manual convert: re-encode the Unicode box and clear the Roman input.
    pub fn convert(&mut self) -> Result<&str, SessionError> {
        if self.unicode_output.trim().is_empty() {
            return Err(SessionError::EmptyUnicode);
        }
        self.preeti_output = transcode(&self.unicode_output);
        self.roman_input.clear();
        Ok(&self.preeti_output)
    }

    pub fn font_preview(&self) -> bool {
        self.font_preview
    }

    pub fn set_font_preview(&mut self, enabled: bool) {
        self.font_preview = enabled;
    }

    fn set_unicode_and_transcode(&mut self, unicode: String) {
        self.preeti_output = transcode(&unicode);
        self.unicode_output = unicode;
    }
}
