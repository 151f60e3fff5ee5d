use anyhow::Context;
use gavfind_settings::{GavfindConfigV1, Overrides, ResolvedConfig};

/// Parse and resolve config text. Empty text means defaults.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        GavfindConfigV1::default()
    } else {
        gavfind_settings::parse_config_toml(config_text).context("parse config")?
    };
    gavfind_settings::resolve_config(cfg, overrides).context("resolve config")
}
