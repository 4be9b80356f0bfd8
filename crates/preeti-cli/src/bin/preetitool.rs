use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use preeti_cli::commands::{config_ops, transcode_ops, translit_ops};

#[derive(Parser)]
#[command(name = "preetitool", about = "Devanagari Unicode ↔ Preeti conversion tool")]
struct Cli {
    /// Custom mapping TOML to use instead of the built-in table
    #[arg(long, global = true)]
    mapping: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcode Devanagari Unicode text to Preeti (reads stdin if TEXT is omitted)
    Transcode {
        /// Unicode text
        text: Option<String>,
    },
    /// Show every stage of the transcoding pipeline
    Explain {
        /// Unicode text (reads stdin if omitted)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate Romanized text to Devanagari via Google Input Tools
    Translit {
        /// Romanized text
        text: String,
        /// Also print the Preeti encoding
        #[arg(long)]
        preeti: bool,
    },
    /// Export default mapping table as TOML
    MappingExport,
    /// Validate a custom mapping TOML file
    MappingValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(ref path) = cli.mapping {
        config_ops::mapping_load(path);
    }
    if let Some(ref path) = cli.settings {
        config_ops::settings_load(path);
    }

    match cli.command {
        Command::Transcode { text } => transcode_ops::transcode_cmd(text.as_deref()),
        Command::Explain { text, json } => transcode_ops::explain_cmd(text.as_deref(), json),
        Command::Translit { text, preeti } => translit_ops::translit_cmd(&text, preeti),
        Command::MappingExport => config_ops::mapping_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
