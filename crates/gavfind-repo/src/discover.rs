use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Discover library files under `scan_paths`.
///
/// Behavior:
/// - A scan path naming a file is taken as-is.
/// - A directory is walked recursively; files whose path relative to that
///   directory matches one of `include` are kept.
/// - Missing scan paths are logged and skipped.
///
/// The result is sorted and deduplicated.
pub fn discover_libraries(
    scan_paths: &[Utf8PathBuf],
    include: &[String],
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let include_set = build_globset(include)?;
    let mut out: Vec<Utf8PathBuf> = Vec::new();

    for root in scan_paths {
        if root.is_file() {
            out.push(root.clone());
            continue;
        }
        if !root.is_dir() {
            tracing::warn!(path = %root, "scan path does not exist, skipping");
            continue;
        }

        for abs in WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        {
            let rel = relative(root, &abs);
            if include_set.is_match(&rel) {
                out.push(abs);
            }
        }
    }

    out.sort();
    out.dedup();
    tracing::debug!(count = out.len(), "discovered library files");

    Ok(out)
}

fn relative(root: &Utf8Path, abs: &Utf8Path) -> String {
    abs.strip_prefix(root)
        .unwrap_or(abs)
        .as_str()
        .replace('\\', "/")
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
