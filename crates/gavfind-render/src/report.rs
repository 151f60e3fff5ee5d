use crate::ReportRow;
use gavfind_types::ids;

/// Column headers in report order. The hash column is named by the caller.
pub fn report_header(hash_name: &str) -> [&str; 7] {
    [
        ids::HEADER_FILE_NAME,
        hash_name,
        ids::HEADER_FOUND,
        ids::HEADER_FOUND_WITH,
        ids::HEADER_GROUP_ID,
        ids::HEADER_ARTIFACT_ID,
        ids::HEADER_VERSION,
    ]
}

/// Render the report as CSV (CRLF line endings, minimal quoting).
///
/// Rows are written in the order given; callers pass found rows first, then
/// exceptions, then unknown.
pub fn render_report_csv(hash_name: &str, rows: &[ReportRow]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(report_header(hash_name))?;
    for row in rows {
        writer.write_record([
            row.file_name.as_str(),
            row.hash.as_str(),
            row.found.as_str(),
            row.found_with.as_str(),
            row.group_id.as_str(),
            row.artifact_id.as_str(),
            row.version.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavfind_types::{ArtifactIdentity, FoundMarker, HashRecord};

    #[test]
    fn renders_header_only_for_empty_report() {
        let csv = render_report_csv("sha1", &[]).expect("render");
        assert_eq!(
            csv,
            "File Name,sha1,Found,Found With,Group Id,Artifact Id,Version\r\n"
        );
    }

    #[test]
    fn renders_markers_and_empty_identity_cells() {
        let a = HashRecord::new("a.jar", "h1");
        let b = HashRecord::new("b.jar", "h2");
        let c = HashRecord::new("c.jar", "h3");
        let rows = vec![
            ReportRow::found(&a, &ArtifactIdentity::new("g1", "a1", "1.0"), "online"),
            ReportRow::unresolved(&b, FoundMarker::Exception),
            ReportRow::unresolved(&c, FoundMarker::NotFound),
        ];

        let csv = render_report_csv("sha1", &rows).expect("render");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "File Name,sha1,Found,Found With,Group Id,Artifact Id,Version",
                "a.jar,h1,Y,online,g1,a1,1.0",
                "b.jar,h2,Exception,,,,",
                "c.jar,h3,N,,,,",
            ]
        );
    }

    #[test]
    fn quotes_cells_containing_commas() {
        let record = HashRecord::new("odd,name.jar", "h");
        let rows = vec![ReportRow::unresolved(&record, FoundMarker::NotFound)];
        let csv = render_report_csv("SHA-1", &rows).expect("render");
        assert!(csv.starts_with("File Name,SHA-1,"));
        assert!(csv.contains("\"odd,name.jar\",h,N,,,,"));
    }
}
