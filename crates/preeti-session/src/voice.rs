use tracing::debug;

use super::types::{TranscriptSegment, VoiceCommand, VoiceError, VoiceStatus};
use super::ConverterSession;

impl ConverterSession {
    pub fn voice_status(&self) -> &VoiceStatus {
        &self.voice_status
    }

    pub fn is_listening(&self) -> bool {
        self.voice_status == VoiceStatus::Listening
    }

    /// Mic button pressed. Failures are not retried automatically; pressing
    /// the button again after a failure asks for a fresh start.
    pub fn toggle_voice(&self) -> VoiceCommand {
        match self.voice_status {
            VoiceStatus::Listening => VoiceCommand::Stop,
            VoiceStatus::Unsupported => VoiceCommand::None,
            VoiceStatus::Off | VoiceStatus::Failed(_) => VoiceCommand::Start,
        }
    }

    pub fn voice_started(&mut self) {
        if self.voice_status != VoiceStatus::Unsupported {
            self.voice_status = VoiceStatus::Listening;
        }
    }

    /// The recognizer stopped. A failure status stays visible.
    pub fn voice_ended(&mut self) {
        if self.voice_status == VoiceStatus::Listening {
            self.voice_status = VoiceStatus::Off;
        }
    }

    pub fn voice_unsupported(&mut self) {
        self.voice_status = VoiceStatus::Unsupported;
    }

    pub fn voice_failed(&mut self, error: VoiceError) {
        debug!(?error, "voice recognition failed");
        self.voice_status = VoiceStatus::Failed(error);
    }

    /// Append the final segments of a recognition result to the Unicode
    /// buffer and re-transcode it. Interim segments are ignored. Returns
    /// true if the buffer changed.
    pub fn voice_result(&mut self, segments: &[TranscriptSegment]) -> bool {
        let finals: String = segments
            .iter()
            .filter(|s| s.is_final)
            .map(|s| s.text.as_str())
            .collect();
        if finals.is_empty() {
            return false;
        }

        let mut unicode = std::mem::take(&mut self.unicode_output);
        if !unicode.is_empty() {
            unicode.push(' ');
        }
        unicode.push_str(&finals);
        self.set_unicode_and_transcode(unicode);
        true
    }
}
