//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{
    AntSection, DevSection, GavfindConfigV1, GradleSection, ManifestSection, MavenSection,
};
pub use resolve::{Overrides, ResolvedConfig};

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gavfind.toml";

/// Parse `gavfind.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GavfindConfigV1> {
    let cfg: GavfindConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (file values + CLI overrides + defaults).
pub fn resolve_config(cfg: GavfindConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
