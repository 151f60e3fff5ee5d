//! The `manifests` use case: build files from an existing report, offline.

use crate::write_text;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use gavfind_domain::{ResolvedSet, resolved_set_from_records};
use gavfind_settings::ResolvedConfig;
use gavfind_types::ArtifactIdentity;

pub const POM_FILE: &str = "pom.xml";
pub const GRADLE_FILE: &str = "build.gradle";
pub const ANT_FILE: &str = "build.xml";

/// Where the three build files were written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestPaths {
    pub pom: Utf8PathBuf,
    pub gradle: Utf8PathBuf,
    pub ant: Utf8PathBuf,
}

/// Render and write `pom.xml`, `build.gradle`, and `build.xml` into `out_dir`.
pub fn write_manifests(
    out_dir: &Utf8Path,
    dependencies: &[ArtifactIdentity],
    config: &ResolvedConfig,
) -> anyhow::Result<ManifestPaths> {
    let paths = ManifestPaths {
        pom: out_dir.join(POM_FILE),
        gradle: out_dir.join(GRADLE_FILE),
        ant: out_dir.join(ANT_FILE),
    };

    write_text(&paths.pom, &gavfind_render::render_pom(dependencies, &config.maven))
        .context("write maven manifest")?;
    write_text(
        &paths.gradle,
        &gavfind_render::render_gradle(dependencies, &config.gradle),
    )
    .context("write gradle manifest")?;
    write_text(&paths.ant, &gavfind_render::render_ant(dependencies, &config.ant))
        .context("write ant manifest")?;

    tracing::info!(
        dependencies = dependencies.len(),
        dir = %out_dir,
        "wrote build manifests"
    );
    Ok(paths)
}

#[derive(Clone, Debug)]
pub struct ManifestsInput<'a> {
    pub config: &'a ResolvedConfig,
    /// A report from an earlier `search` run.
    pub input: &'a Utf8Path,
}

#[derive(Clone, Debug)]
pub struct ManifestsOutput {
    pub artifacts: ResolvedSet,
    pub manifests: ManifestPaths,
}

/// Emit build files for every `Y` row of an existing report.
pub fn run_manifests(input: ManifestsInput<'_>) -> anyhow::Result<ManifestsOutput> {
    if !input.input.is_file() {
        anyhow::bail!("report not found: {}", input.input);
    }
    let records = gavfind_repo::read_hash_records(input.input, &input.config.hash_name)
        .context("read report")?;
    let artifacts = resolved_set_from_records(&records);
    let manifests = write_manifests(&input.config.out_dir, artifacts.as_slice(), input.config)?;
    Ok(ManifestsOutput {
        artifacts,
        manifests,
    })
}
