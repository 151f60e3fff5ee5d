//! The `search` use case: scan, hash, resolve, and write the report and build files.

use crate::manifests::{ManifestPaths, write_manifests};
use crate::write_text;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gavfind_domain::{Resolution, Resolver};
use gavfind_render::ReportRow;
use gavfind_search::ArtifactSearch;
use gavfind_settings::ResolvedConfig;
use gavfind_types::FoundMarker;
use time::OffsetDateTime;

/// Input for the search use case.
#[derive(Clone, Copy)]
pub struct SearchInput<'a> {
    pub config: &'a ResolvedConfig,
    pub search: &'a dyn ArtifactSearch,
    /// CSV to resolve. Defaults to the configured hash file; pass an earlier report
    /// to skip rows already resolved.
    pub input: Option<&'a Utf8Path>,
    /// Scan the configured library paths and rewrite the hash file first.
    pub scan: bool,
}

/// Output from the search use case.
#[derive(Clone, Debug)]
pub struct SearchOutput {
    pub resolution: Resolution,
    /// Set when a library scan rewrote the hash file.
    pub hash_path: Option<Utf8PathBuf>,
    /// The CSV that was resolved.
    pub input_path: Utf8PathBuf,
    pub report_path: Utf8PathBuf,
    pub manifests: ManifestPaths,
    pub started_at: OffsetDateTime,
    pub finished_at: OffsetDateTime,
}

impl SearchOutput {
    pub fn duration_ms(&self) -> u64 {
        (self.finished_at - self.started_at)
            .whole_milliseconds()
            .max(0) as u64
    }
}

/// Run the search use case.
///
/// Zero input records is not an error: an empty report and empty build files are written.
pub fn run_search(input: SearchInput<'_>) -> anyhow::Result<SearchOutput> {
    let started_at = OffsetDateTime::now_utc();
    let config = input.config;

    let hash_path = if input.scan && !config.scan_libs.is_empty() {
        let files = gavfind_repo::discover_libraries(&config.scan_libs, &config.include)
            .context("discover libraries")?;
        let records = gavfind_repo::hash_libraries(&files).context("hash libraries")?;
        let path = config.hash_path();
        gavfind_repo::write_hash_csv(&path, &records, &config.hash_name)
            .context("write hash file")?;
        Some(path)
    } else {
        None
    };

    let input_path = input
        .input
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| config.hash_path());
    if input.input.is_none() && !input_path.is_file() {
        tracing::warn!(
            out_dir = %config.out_dir,
            "no hash file at {input_path}; relative hash_file names resolve under out_dir, \
             pass --input or configure scan_libs"
        );
    }
    let records = gavfind_repo::read_hash_records(&input_path, &config.hash_name)
        .context("read hash records")?;

    let resolver = Resolver::new(input.search, config.retry);
    let resolution = resolver
        .resolve_all(&records)
        .context("resolve hashes")?;

    let report_path = config.report_path();
    let report = gavfind_render::render_report_csv(&config.hash_name, &report_rows(&resolution))
        .context("render report")?;
    write_text(&report_path, &report).context("write report")?;

    let manifests = write_manifests(&config.out_dir, resolution.artifacts.as_slice(), config)?;

    let counts = resolution.counts();
    tracing::info!(
        records = counts.records,
        found = counts.found,
        exceptions = counts.exceptions,
        not_found = counts.unknown,
        artifacts = counts.artifacts,
        attempts = counts.attempts,
        report = %report_path,
        "search finished"
    );

    Ok(SearchOutput {
        resolution,
        hash_path,
        input_path,
        report_path,
        manifests,
        started_at,
        finished_at: OffsetDateTime::now_utc(),
    })
}

/// Report rows: found first, then exceptions, then not found. Each group keeps input order.
pub fn report_rows(resolution: &Resolution) -> Vec<ReportRow> {
    let found = resolution
        .found
        .iter()
        .map(|r| ReportRow::found(&r.record, &r.identity, &r.found_with));
    let exceptions = resolution
        .exceptions
        .iter()
        .map(|e| ReportRow::unresolved(&e.record, FoundMarker::Exception));
    let unknown = resolution
        .unknown
        .iter()
        .map(|r| ReportRow::unresolved(r, FoundMarker::NotFound));
    found.chain(exceptions).chain(unknown).collect()
}
