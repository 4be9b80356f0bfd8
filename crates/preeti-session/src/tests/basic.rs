use super::*;
use crate::SessionError;

// --- Path A: Romanized input ---

#[test]
fn test_roman_input_requests_transliteration() {
    let mut session = ConverterSession::new();
    let req = type_roman(&mut session, "namaste");
    assert_eq!(req.text, "namaste");
    assert_eq!(req.generation, 1);
    assert_eq!(session.roman_input(), "namaste");
}

#[test]
fn test_roman_input_normalizes_full_stop() {
    let mut session = ConverterSession::new();
    let req = type_roman(&mut session, "ma ghar jaanchhu.");
    assert_eq!(req.text, "ma ghar jaanchhu।");
    // The box keeps what the user typed
    assert_eq!(session.roman_input(), "ma ghar jaanchhu.");
}

#[test]
fn test_receive_unicode_transcodes() {
    let mut session = ConverterSession::new();
    let req = type_roman(&mut session, "kitaab");
    assert!(session.receive_unicode(req.generation, "किताब"));
    assert_eq!(session.unicode_output(), "किताब");
    assert_eq!(session.preeti_output(), "lstfa");
}

#[test]
fn test_stale_result_dropped() {
    let mut session = ConverterSession::new();
    let old = type_roman(&mut session, "ki");
    let new = type_roman(&mut session, "kitaab");
    assert!(!session.receive_unicode(old.generation, "कि"));
    assert_eq!(session.unicode_output(), "");
    assert!(session.receive_unicode(new.generation, "किताब"));
    assert_eq!(session.preeti_output(), "lstfa");
}

#[test]
fn test_blank_input_clears_outputs() {
    let mut session = ConverterSession::new();
    let req = type_roman(&mut session, "ghar");
    session.receive_unicode(req.generation, "घर");
    assert_eq!(session.preeti_output(), "3/");

    assert_eq!(
        session.handle_roman_input("   "),
        RomanInputResponse::Cleared
    );
    assert_eq!(session.unicode_output(), "");
    assert_eq!(session.preeti_output(), "");
}

#[test]
fn test_clear_invalidates_in_flight_request() {
    let mut session = ConverterSession::new();
    let req = type_roman(&mut session, "ghar");
    session.handle_roman_input("");
    assert!(!session.receive_unicode(req.generation, "घर"));
    assert_eq!(session.unicode_output(), "");
}

// --- Path B: manual convert ---

#[test]
fn test_convert_empty_unicode_is_error() {
    let mut session = ConverterSession::new();
    assert_eq!(session.convert(), Err(SessionError::EmptyUnicode));
    session.set_unicode_output("  \n");
    assert_eq!(session.convert(), Err(SessionError::EmptyUnicode));
    assert_eq!(
        SessionError::EmptyUnicode.to_string(),
        "Please provide Unicode text first."
    );
}

#[test]
fn test_convert_edited_unicode() {
    let mut session = ConverterSession::new();
    let req = type_roman(&mut session, "ghar");
    session.receive_unicode(req.generation, "घर");

    session.set_unicode_output("क्षेत्र.");
    // Editing alone does not touch the Preeti box
    assert_eq!(session.preeti_output(), "3/");

    assert_eq!(session.convert().unwrap(), "If]qm");
    assert_eq!(session.preeti_output(), "If]qm");
    assert_eq!(session.roman_input(), "");
}

// --- Font preview ---

#[test]
fn test_font_preview_toggle() {
    let mut session = ConverterSession::new();
    assert!(!session.font_preview());
    session.set_font_preview(true);
    assert!(session.font_preview());
    session.set_font_preview(false);
    assert!(!session.font_preview());
}
