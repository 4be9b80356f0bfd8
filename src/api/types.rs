use preeti_session::{
    ConverterSession, SessionError, TranscriptSegment, VoiceCommand, VoiceError, VoiceStatus,
};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PreetiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("{msg}")]
    EmptyInput { msg: String },
}

impl From<SessionError> for PreetiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::EmptyUnicode => PreetiError::EmptyInput { msg: e.to_string() },
        }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// Contents of the three text boxes plus the UI flags.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct PreetiSnapshot {
    pub roman_input: String,
    pub unicode_output: String,
    pub preeti_output: String,
    pub font_preview: bool,
    pub voice_status: PreetiVoiceStatus,
    pub voice_label: String,
}

impl PreetiSnapshot {
    pub(super) fn of(session: &ConverterSession) -> Self {
        Self {
            roman_input: session.roman_input().to_string(),
            unicode_output: session.unicode_output().to_string(),
            preeti_output: session.preeti_output().to_string(),
            font_preview: session.font_preview(),
            voice_status: session.voice_status().into(),
            voice_label: session.voice_status().label(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct PreetiTranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl From<PreetiTranscriptSegment> for TranscriptSegment {
    fn from(s: PreetiTranscriptSegment) -> Self {
        TranscriptSegment {
            text: s.text,
            is_final: s.is_final,
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum PreetiVoiceStatus {
    Off,
    Listening,
    Unsupported,
    PermissionDenied,
    Failed { msg: String },
}

impl From<&VoiceStatus> for PreetiVoiceStatus {
    fn from(s: &VoiceStatus) -> Self {
        match s {
            VoiceStatus::Off => PreetiVoiceStatus::Off,
            VoiceStatus::Listening => PreetiVoiceStatus::Listening,
            VoiceStatus::Unsupported | VoiceStatus::Failed(VoiceError::NotSupported) => {
                PreetiVoiceStatus::Unsupported
            }
            VoiceStatus::Failed(VoiceError::PermissionDenied) => {
                PreetiVoiceStatus::PermissionDenied
            }
            VoiceStatus::Failed(VoiceError::Other(msg)) => {
                PreetiVoiceStatus::Failed { msg: msg.clone() }
            }
        }
    }
}

#[derive(Debug, Clone, uniffi::Enum)]
pub enum PreetiVoiceError {
    PermissionDenied,
    NotSupported,
    Other { msg: String },
}

impl From<PreetiVoiceError> for VoiceError {
    fn from(e: PreetiVoiceError) -> Self {
        match e {
            PreetiVoiceError::PermissionDenied => VoiceError::PermissionDenied,
            PreetiVoiceError::NotSupported => VoiceError::NotSupported,
            PreetiVoiceError::Other { msg } => VoiceError::Other(msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PreetiVoiceCommand {
    Start,
    Stop,
    /// No recognizer on this platform; the mic control should stay hidden.
    Unavailable,
}

impl From<VoiceCommand> for PreetiVoiceCommand {
    fn from(c: VoiceCommand) -> Self {
        match c {
            VoiceCommand::Start => PreetiVoiceCommand::Start,
            VoiceCommand::Stop => PreetiVoiceCommand::Stop,
            VoiceCommand::None => PreetiVoiceCommand::Unavailable,
        }
    }
}
