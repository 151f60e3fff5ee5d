//! Developer tasks (schema generation, fixture updates).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use gavfind_render::{GradleProject, MavenProject};
use schemars::schema_for;
use std::fs;

/// Project root (parent of the xtask directory).
fn project_root() -> Utf8PathBuf {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> Utf8PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> Utf8PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(gavfind_settings::GavfindConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "gavfind.config.v1.json",
        generate: generate_config_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("Failed to write schema to {path}"))?;
        println!("Wrote {path}");
    }
    Ok(())
}

/// Check that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", spec.filename)),
            Err(_) => stale.push(format!("{} (missing)", spec.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &stale {
        eprintln!("  - {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Expected build files derived from a fixture report, rendered with default project settings.
fn expected_manifests(report: &Utf8Path) -> anyhow::Result<[(&'static str, String); 2]> {
    let records = gavfind_repo::read_hash_records(report, gavfind_types::ids::DEFAULT_HASH_NAME)
        .with_context(|| format!("read {report}"))?;
    let artifacts = gavfind_domain::resolved_set_from_records(&records);
    let deps = artifacts.as_slice();
    Ok([
        (
            "expected.pom.xml",
            gavfind_render::render_pom(deps, &MavenProject::default()),
        ),
        (
            "expected.build.gradle",
            gavfind_render::render_gradle(deps, &GradleProject::default()),
        ),
    ])
}

/// Fixture directories that carry expected build files.
fn manifest_fixtures() -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(fixtures_dir()).context("read fixtures directory")? {
        let path = entry?.path();
        let Ok(dir) = Utf8PathBuf::from_path_buf(path) else {
            continue;
        };
        if dir.join("expected.pom.xml").is_file() {
            dirs.push(dir);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Rewrite expected build files from each fixture's `report.csv`.
fn update_fixtures() -> anyhow::Result<()> {
    for dir in manifest_fixtures()? {
        for (name, text) in expected_manifests(&dir.join("report.csv"))? {
            let path = dir.join(name);
            fs::write(&path, text).with_context(|| format!("write {path}"))?;
            println!("Wrote {path}");
        }
    }
    Ok(())
}

/// Fail when an expected build file no longer matches its report.
fn check_fixtures() -> anyhow::Result<()> {
    let mut stale = Vec::new();
    for dir in manifest_fixtures()? {
        for (name, text) in expected_manifests(&dir.join("report.csv"))? {
            let path = dir.join(name);
            if fs::read_to_string(&path).ok().as_deref() != Some(text.as_str()) {
                stale.push(path);
            }
        }
    }
    if stale.is_empty() {
        println!("All fixtures are up to date.");
        return Ok(());
    }
    for path in &stale {
        eprintln!("  - {path}");
    }
    eprintln!("\nRun `cargo xtask update-fixtures` to regenerate.");
    bail!("Fixture check failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  update-fixtures   Regenerate expected build files under tests/fixtures/");
    eprintln!("  check-fixtures    Check expected build files against their reports (for CI)");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "update-fixtures" => update_fixtures(),
        "check-fixtures" => check_fixtures(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
