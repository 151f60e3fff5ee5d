use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gavfind_types::{HashRecord, ids};
use rayon::prelude::*;
use sha1::{Digest, Sha1};
use std::io::BufReader;

/// Lowercase hex SHA-1 of the file contents.
pub fn sha1_file(path: &Utf8Path) -> anyhow::Result<String> {
    let file = std::fs::File::open(path).with_context(|| format!("open {path}"))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha1::new();
    std::io::copy(&mut reader, &mut hasher).with_context(|| format!("hash {path}"))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Hash every file in parallel. Output order follows `files`.
pub fn hash_libraries(files: &[Utf8PathBuf]) -> anyhow::Result<Vec<HashRecord>> {
    let records = files
        .par_iter()
        .map(|path| -> anyhow::Result<HashRecord> {
            let hash = sha1_file(path)?;
            let filename = path.file_name().unwrap_or(path.as_str());
            tracing::debug!(file = filename, %hash, "hashed library");
            Ok(HashRecord::new(filename, hash))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    tracing::info!(count = records.len(), "hashed library files");
    Ok(records)
}

/// Render the two-column hash CSV (`File Name,<hash_name>`).
pub fn render_hash_csv(records: &[HashRecord], hash_name: &str) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record([ids::HEADER_FILE_NAME, hash_name])?;
    for record in records {
        writer.write_record([record.filename.as_str(), record.hash.as_str()])?;
    }
    let bytes = writer.into_inner().context("flush hash csv")?;
    Ok(String::from_utf8(bytes)?)
}

pub fn write_hash_csv(
    path: &Utf8Path,
    records: &[HashRecord],
    hash_name: &str,
) -> anyhow::Result<()> {
    let text = render_hash_csv(records, hash_name)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    tracing::info!(%path, count = records.len(), "wrote hash file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_hash_records;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn sha1_of_known_content() {
        let tmp = TempDir::new().expect("temp dir");
        let path = utf8_root(&tmp).join("abc.jar");
        std::fs::write(&path, b"abc").expect("write");

        assert_eq!(
            sha1_file(&path).expect("hash"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn sha1_of_empty_file() {
        let tmp = TempDir::new().expect("temp dir");
        let path = utf8_root(&tmp).join("empty.jar");
        std::fs::write(&path, b"").expect("write");

        assert_eq!(
            sha1_file(&path).expect("hash"),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn hashing_keeps_input_order_and_uses_file_names() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        let files: Vec<Utf8PathBuf> = (0..16)
            .map(|i| {
                let path = root.join(format!("dir{i}/lib{i}.jar"));
                std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
                std::fs::write(&path, format!("content {i}")).expect("write");
                path
            })
            .collect();

        let records = hash_libraries(&files).expect("hash");
        let names: Vec<String> = records.iter().map(|r| r.filename.clone()).collect();
        let expected: Vec<String> = (0..16).map(|i| format!("lib{i}.jar")).collect();
        assert_eq!(names, expected);
        assert!(records.iter().all(|r| r.hash.len() == 40));
    }

    #[test]
    fn missing_file_fails_hashing() {
        let tmp = TempDir::new().expect("temp dir");
        let err = hash_libraries(&[utf8_root(&tmp).join("gone.jar")]).unwrap_err();
        assert!(err.to_string().contains("gone.jar"));
    }

    #[test]
    fn hash_csv_layout() {
        let records = vec![HashRecord::new("a.jar", "h1"), HashRecord::new("b,c.jar", "h2")];
        let text = render_hash_csv(&records, "sha1").expect("render");
        assert_eq!(text, "File Name,sha1\r\na.jar,h1\r\n\"b,c.jar\",h2\r\n");
    }

    #[test]
    fn written_hash_file_reads_back() {
        let tmp = TempDir::new().expect("temp dir");
        let path = utf8_root(&tmp).join("out/lib-hash.csv");
        let records = vec![HashRecord::new("a.jar", "h1")];

        write_hash_csv(&path, &records, "sha1").expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(parse_hash_records(&text, "sha1").expect("parse"), records);
    }
}
