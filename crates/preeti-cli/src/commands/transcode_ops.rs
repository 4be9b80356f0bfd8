use std::io::{self, Read};

use unicode_width::UnicodeWidthStr;

use preeti_core::mapping::{PreetiTable, Substitution};
use preeti_core::{explain, transcode};

/// Read the whole of stdin when no text argument was given.
fn input_text(text: Option<&str>) -> String {
    match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

pub fn transcode_cmd(text: Option<&str>) {
    let input = input_text(text);
    print!("{}", transcode(&input));
    if text.is_some() {
        println!();
    }
}

pub fn explain_cmd(text: Option<&str>, json: bool) {
    let input = input_text(text);
    let trace = explain(PreetiTable::global(), &input);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&trace),
            "Error serializing trace: {}"
        );
        println!("{out}");
        return;
    }

    println!("input:      {}", trace.input);
    println!("normalized: {}", trace.normalized);
    println!("reordered:  {}", trace.reordered);
    println!("output:     {}", trace.output);

    if trace.substitutions.is_empty() {
        return;
    }
    println!();
    for line in substitution_lines(&trace.substitutions) {
        println!("{line}");
    }
}

/// One numbered line per substitution, with sources padded to a common
/// display width.
fn substitution_lines(steps: &[Substitution]) -> Vec<String> {
    let width = steps.iter().map(|s| s.source.width()).max().unwrap_or(0);
    steps
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let pad = width - s.source.width();
            format!("#{:>3}  {}{}  → {}", i + 1, s.source, " ".repeat(pad), s.output)
        })
        .collect()
}
