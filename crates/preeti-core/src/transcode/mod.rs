//! Unicode → Preeti pipeline: purna biram, i-kar reordering, substitution.


use serde::Serialize;
use tracing::{debug, debug_span};

use crate::biram::fix_biram;
use crate::mapping::{PreetiTable, Substitution};
use crate::reorder::reorder;

/// Transcode Devanagari Unicode text to the Preeti encoding using the global
/// table. Total: every input produces an output, empty in gives empty out.
pub fn transcode(text: &str) -> String {
    transcode_with(PreetiTable::global(), text)
}

pub fn transcode_with(table: &PreetiTable, text: &str) -> String {
    let _span = debug_span!("transcode", chars = text.chars().count()).entered();
    let normalized = fix_biram(text);
    let reordered = reorder(&normalized, table.reorder_rule());
    table.apply(&reordered)
}

/// Every intermediate stage of one transcode, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct TranscodeTrace {
    pub input: String,
    pub normalized: String,
    pub reordered: String,
    pub output: String,
    pub substitutions: Vec<Substitution>,
}

pub fn explain(table: &PreetiTable, text: &str) -> TranscodeTrace {
    let _span = debug_span!("explain", chars = text.chars().count()).entered();
    let normalized = fix_biram(text);
    let reordered = reorder(&normalized, table.reorder_rule());
    let (output, substitutions) = table.apply_traced(&reordered);
    debug!(substitutions = substitutions.len());
    TranscodeTrace {
        input: text.to_string(),
        normalized,
        reordered,
        output,
        substitutions,
    }
}
