use std::fs;

use preeti_core::mapping::{self, PreetiTable};
use preeti_core::settings;

pub fn mapping_export() {
    print!("{}", mapping::default_toml());
}

pub fn mapping_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(PreetiTable::from_toml(&content), "Error: {}");
    let rule = table.reorder_rule();
    println!(
        "OK: {} mappings, longest key {} chars, reorder {} → {}",
        table.len(),
        table.max_key_len(),
        rule.sign,
        rule.prefix
    );
}

/// Install a custom mapping table for the rest of the process.
pub fn mapping_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(PreetiTable::init_custom(content), "Error loading {file}: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: endpoint={}, input_tool={}, chunk_size={}, debounce_ms={}",
        s.transliteration.endpoint,
        s.transliteration.input_tool,
        s.transliteration.chunk_size,
        s.input.debounce_ms
    );
}

pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading {file}: {}");
}
