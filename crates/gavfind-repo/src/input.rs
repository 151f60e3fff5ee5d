use anyhow::Context;
use camino::Utf8Path;
use gavfind_types::{FoundMarker, HashRecord, ids};

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    filename: Option<usize>,
    hash: Option<usize>,
    found: Option<usize>,
    found_with: Option<usize>,
    group_id: Option<usize>,
    artifact_id: Option<usize>,
    version: Option<usize>,
}

impl Columns {
    fn from_header(header: &csv::StringRecord, hash_name: &str) -> Self {
        let mut cols = Columns::default();
        for (index, name) in header.iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}');
            if name == hash_name {
                cols.hash = Some(index);
                continue;
            }
            match name {
                ids::HEADER_FILE_NAME => cols.filename = Some(index),
                ids::HEADER_FOUND => cols.found = Some(index),
                ids::HEADER_FOUND_WITH => cols.found_with = Some(index),
                ids::HEADER_GROUP_ID => cols.group_id = Some(index),
                ids::HEADER_ARTIFACT_ID => cols.artifact_id = Some(index),
                ids::HEADER_VERSION => cols.version = Some(index),
                _ => {}
            }
        }
        cols
    }
}

fn cell(row: &csv::StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .unwrap_or_default()
        .to_string()
}

/// Parse a hash or report CSV.
///
/// Columns are located by header name, so their order does not matter. Only
/// `File Name` and the hash column are required; without them the file yields no
/// records. Missing cells read as empty.
pub fn parse_hash_records(text: &str, hash_name: &str) -> anyhow::Result<Vec<HashRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader.headers().context("read csv header")?.clone();
    let cols = Columns::from_header(&header, hash_name);
    let (Some(filename_col), Some(hash_col)) = (cols.filename, cols.hash) else {
        tracing::error!(
            "invalid file format, cannot find '{}' and '{}' columns",
            ids::HEADER_FILE_NAME,
            hash_name
        );
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("read csv row {}", line + 2))?;
        records.push(HashRecord {
            filename: cell(&row, Some(filename_col)),
            hash: cell(&row, Some(hash_col)),
            found: cols
                .found
                .and_then(|i| row.get(i))
                .and_then(FoundMarker::parse),
            found_with: cell(&row, cols.found_with),
            group_id: cell(&row, cols.group_id),
            artifact_id: cell(&row, cols.artifact_id),
            version: cell(&row, cols.version),
        });
    }
    Ok(records)
}

/// Read hash records from `path`. A missing file is logged and yields no records.
pub fn read_hash_records(path: &Utf8Path, hash_name: &str) -> anyhow::Result<Vec<HashRecord>> {
    tracing::info!(%path, "reading hash values");
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!(%path, "file not found: {err}");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err).with_context(|| format!("read {path}")),
    };
    parse_hash_records(&text, hash_name).with_context(|| format!("parse {path}"))
}
