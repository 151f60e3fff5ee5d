use anyhow::Context;
use camino::Utf8Path;

/// Write `text` to `path`, creating parent directories.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}
