pub const DEFAULT_TOML: &str = include_str!("default_preeti.toml");
