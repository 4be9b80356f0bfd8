//! Romanized → Devanagari transliteration boundary.
//!
//! The actual conversion is done by a remote input-method service behind the
//! [`Transliterator`] trait. This module owns the parts that do not depend on
//! the transport: splitting the input into word chunks and falling back to
//! the original chunk whenever a request fails.

use tracing::{debug, debug_span};

#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("service returned status {0:?}")]
    Status(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A service converting one chunk of Romanized text to Devanagari.
pub trait Transliterator {
    fn transliterate_chunk(&self, chunk: &str) -> Result<String, TranslitError>;
}

/// Split `text` on whitespace and regroup into chunks of at most
/// `chunk_size` words joined by single spaces. A `chunk_size` of 0 is
/// treated as 1.
pub fn chunk_words(text: &str, chunk_size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}

/// Transliterate `text` chunk by chunk. A chunk whose request fails is kept
/// as-is; the results are joined with single spaces.
pub fn transliterate<T: Transliterator + ?Sized>(
    service: &T,
    text: &str,
    chunk_size: usize,
) -> String {
    let chunks = chunk_words(text, chunk_size);
    let _span = debug_span!("transliterate", chunks = chunks.len()).entered();

    let results: Vec<String> = chunks
        .into_iter()
        .map(|chunk| match service.transliterate_chunk(&chunk) {
            Ok(unicode) => unicode,
            Err(e) => {
                debug!("transliteration failed, keeping original chunk: {e}");
                chunk
            }
        })
        .collect();
    results.join(" ")
}
