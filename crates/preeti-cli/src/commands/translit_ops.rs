use tracing::debug;

use preeti_core::biram::fix_biram;
use preeti_core::settings::settings;
use preeti_core::transcode;
use preeti_core::translit::transliterate;
use preeti_engine::input_tools::InputToolsClient;

/// Romanized text → Devanagari via Google Input Tools, optionally followed
/// by Preeti transcoding.
pub fn translit_cmd(text: &str, preeti: bool) {
    let normalized = fix_biram(text);
    if normalized.trim().is_empty() {
        return;
    }

    let config = &settings().transliteration;
    debug!(endpoint = %config.endpoint, chunk_size = config.chunk_size, "transliterating");
    let client = InputToolsClient::new(config);
    let chunk_size = config.chunk_size;
    let unicode = transliterate(&client, &normalized, chunk_size);
    println!("{unicode}");
    if preeti {
        println!("{}", transcode(&unicode));
    }
}
