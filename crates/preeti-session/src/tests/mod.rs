mod basic;

use super::{ConverterSession, RomanInputResponse, TranslitRequest};

/// Type `text` into the Roman box and return the transliteration request.
pub(super) fn type_roman(session: &mut ConverterSession, text: &str) -> TranslitRequest {
    match session.handle_roman_input(text) {
        RomanInputResponse::Transliterate(req) => req,
        RomanInputResponse::Cleared => panic!("expected a transliteration request for {text:?}"),
    }
}
