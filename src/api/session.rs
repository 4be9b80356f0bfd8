use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use preeti_core::settings::settings;
use preeti_session::{ConverterSession, RomanInputResponse};

use crate::async_worker::{SharedTransliterator, TranslitWorker};
use crate::input_tools::InputToolsClient;

use super::types::{
    PreetiError, PreetiSnapshot, PreetiTranscriptSegment, PreetiVoiceCommand, PreetiVoiceError,
};

#[derive(uniffi::Object)]
pub struct PreetiSession {
    session: Mutex<ConverterSession>,
    worker: TranslitWorker,
}

#[uniffi::export]
impl PreetiSession {
    /// Session backed by Google Input Tools, configured from global settings.
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        let s = settings();
        Self::with_transliterator(
            Arc::new(InputToolsClient::from_settings()),
            s.input.debounce(),
            s.transliteration.chunk_size,
        )
    }

    /// The Roman input box changed. Transliteration runs in the background;
    /// call [`poll`](Self::poll) to pick up the result.
    fn handle_roman_input(&self, text: String) -> PreetiSnapshot {
        let mut session = self.lock();
        match session.handle_roman_input(&text) {
            RomanInputResponse::Transliterate(req) => self.worker.submit(req.text, req.generation),
            RomanInputResponse::Cleared => self.worker.invalidate(),
        }
        PreetiSnapshot::of(&session)
    }

    /// Apply finished transliteration work. Returns a snapshot only if the
    /// boxes changed.
    fn poll(&self) -> Option<PreetiSnapshot> {
        let mut session = self.lock();
        let mut changed = false;
        while let Some(result) = self.worker.try_recv() {
            changed |= session.receive_unicode(result.generation, &result.unicode);
        }
        changed.then(|| PreetiSnapshot::of(&session))
    }

    fn set_unicode(&self, text: String) {
        self.lock().set_unicode_output(&text);
    }

    fn convert(&self) -> Result<String, PreetiError> {
        let mut session = self.lock();
        let out = session.convert()?;
        Ok(out.to_string())
    }

    fn set_font_preview(&self, enabled: bool) {
        self.lock().set_font_preview(enabled);
    }

    fn toggle_voice(&self) -> PreetiVoiceCommand {
        self.lock().toggle_voice().into()
    }

    fn voice_started(&self) {
        self.lock().voice_started();
    }

    fn voice_ended(&self) {
        self.lock().voice_ended();
    }

    fn voice_unsupported(&self) {
        self.lock().voice_unsupported();
    }

    fn voice_failed(&self, error: PreetiVoiceError) {
        self.lock().voice_failed(error.into());
    }

    fn voice_result(&self, segments: Vec<PreetiTranscriptSegment>) -> PreetiSnapshot {
        let segments: Vec<_> = segments.into_iter().map(Into::into).collect();
        let mut session = self.lock();
        session.voice_result(&segments);
        PreetiSnapshot::of(&session)
    }

    fn snapshot(&self) -> PreetiSnapshot {
        PreetiSnapshot::of(&self.lock())
    }
}

impl PreetiSession {
    pub fn with_transliterator(
        service: SharedTransliterator,
        debounce: Duration,
        chunk_size: usize,
    ) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(ConverterSession::new()),
            worker: TranslitWorker::new(service, debounce, chunk_size),
        })
    }

    fn lock(&self) -> MutexGuard<'_, ConverterSession> {
        // Session state stays consistent even if a previous holder panicked
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Instant;

    use preeti_core::translit::{TranslitError, Transliterator};

    use super::*;
    use crate::api::PreetiVoiceStatus;

    /// Fixed Roman → Devanagari word list; unknown words fail.
    struct WordList;

    impl Transliterator for WordList {
        fn transliterate_chunk(&self, chunk: &str) -> Result<String, TranslitError> {
            chunk
                .split(' ')
                .map(|w| match w {
                    "kitaab" => Ok("किताब"),
                    "ghar" => Ok("घर"),
                    "।" => Ok("।"),
                    _ => Err(TranslitError::Status("FAILED".into())),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|words| words.join(" "))
        }
    }

    fn session() -> Arc<PreetiSession> {
        PreetiSession::with_transliterator(Arc::new(WordList), Duration::ZERO, 10)
    }

    fn poll_until_changed(s: &PreetiSession) -> PreetiSnapshot {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(snap) = s.poll() {
                return snap;
            }
            assert!(Instant::now() < deadline, "no transliteration result");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_roman_input_round_trip() {
        let s = session();
        let snap = s.handle_roman_input("ghar kitaab".into());
        assert_eq!(snap.roman_input, "ghar kitaab");
        assert_eq!(snap.preeti_output, "");

        let snap = poll_until_changed(&s);
        assert_eq!(snap.unicode_output, "घर किताब");
        assert_eq!(snap.preeti_output, "3/ lstfa");
    }

    #[test]
    fn test_failed_chunk_passes_through() {
        let s = session();
        s.handle_roman_input("xyz".into());
        let snap = poll_until_changed(&s);
        assert_eq!(snap.unicode_output, "xyz");
        assert_eq!(snap.preeti_output, "xyz");
    }

    #[test]
    fn test_blank_input_clears() {
        let s = session();
        s.handle_roman_input("ghar".into());
        poll_until_changed(&s);
        let snap = s.handle_roman_input(" ".into());
        assert_eq!(snap.unicode_output, "");
        assert_eq!(snap.preeti_output, "");
    }

    #[test]
    fn test_convert_requires_unicode() {
        let s = session();
        let err = s.convert().unwrap_err();
        assert!(matches!(err, PreetiError::EmptyInput { .. }));
        assert_eq!(err.to_string(), "Please provide Unicode text first.");

        s.set_unicode("क्षि".into());
        assert_eq!(s.convert().unwrap(), "lIf");
    }

    #[test]
    fn test_voice_flow() {
        let s = session();
        assert_eq!(s.toggle_voice(), PreetiVoiceCommand::Start);
        s.voice_started();
        let snap = s.voice_result(vec![
            PreetiTranscriptSegment {
                text: "घर".into(),
                is_final: true,
            },
            PreetiTranscriptSegment {
                text: "जा".into(),
                is_final: false,
            },
        ]);
        assert_eq!(snap.unicode_output, "घर");
        assert_eq!(snap.preeti_output, "3/");
        assert_eq!(snap.voice_status, PreetiVoiceStatus::Listening);

        s.voice_failed(PreetiVoiceError::PermissionDenied);
        assert_eq!(
            s.snapshot().voice_status,
            PreetiVoiceStatus::PermissionDenied
        );
    }
}
