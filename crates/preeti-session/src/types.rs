/// Request for asynchronous transliteration of the Romanized input.
/// The caller hands `text` to the transliteration service and feeds the
/// result back through `receive_unicode` with the same `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitRequest {
    /// Romanized input after purna-biram normalization.
    pub text: String,
    pub generation: u64,
}

/// Outcome of a change to the Romanized input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomanInputResponse {
    /// Input is blank: both outputs were cleared, nothing to send.
    Cleared,
    Transliterate(TranslitRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please provide Unicode text first.")]
    EmptyUnicode,
}

/// Why the speech recognizer stopped or could not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    PermissionDenied,
    NotSupported,
    Other(String),
}

/// User-visible microphone state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceStatus {
    Off,
    Listening,
    /// The platform has no speech recognizer; the mic control is hidden.
    Unsupported,
    Failed(VoiceError),
}

impl VoiceStatus {
    /// Status line shown next to the microphone button.
    pub fn label(&self) -> String {
        match self {
            VoiceStatus::Off => "Microphone off".to_string(),
            VoiceStatus::Listening => "Listening...".to_string(),
            VoiceStatus::Unsupported => "Voice typing not supported.".to_string(),
            VoiceStatus::Failed(VoiceError::PermissionDenied) => {
                "Microphone permission denied.".to_string()
            }
            VoiceStatus::Failed(VoiceError::NotSupported) => {
                "Voice typing not supported.".to_string()
            }
            VoiceStatus::Failed(VoiceError::Other(msg)) => format!("Voice error: {msg}"),
        }
    }
}

/// What the caller should do with the recognizer after a mic toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    Start,
    Stop,
    None,
}

/// One piece of a speech-recognition result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }
}
