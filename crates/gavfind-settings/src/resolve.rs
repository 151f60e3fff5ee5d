use crate::model::GavfindConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use gavfind_domain::RetryPolicy;
use gavfind_render::{AntProject, GradleProject, MavenProject};
use gavfind_search::DEFAULT_SEARCH_URL;
use gavfind_types::ids;
use globset::Glob;

const DEFAULT_HASH_FILE: &str = "lib-hash.csv";
const DEFAULT_REPORT_FILE: &str = "report.csv";
const DEFAULT_OUT_DIR: &str = ".";
const DEFAULT_INCLUDE: &str = "**/*.jar";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub retries: Option<u32>,
    pub out_dir: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    /// Search base URL, always ending in `/`.
    pub url: String,
    pub retry: RetryPolicy,
    pub scan_libs: Vec<Utf8PathBuf>,
    pub include: Vec<String>,
    pub hash_name: String,
    pub hash_file: Utf8PathBuf,
    pub report_file: Utf8PathBuf,
    pub out_dir: Utf8PathBuf,
    pub username: Option<String>,
    pub password: Option<String>,
    pub dev_mode: bool,
    pub maven: MavenProject,
    pub gradle: GradleProject,
    pub ant: AntProject,
}

impl ResolvedConfig {
    /// Where the hash CSV lives. Relative names are placed under `out_dir`.
    pub fn hash_path(&self) -> Utf8PathBuf {
        self.out_dir.join(&self.hash_file)
    }

    /// Where the report CSV is written. Relative names are placed under `out_dir`.
    pub fn report_path(&self) -> Utf8PathBuf {
        self.out_dir.join(&self.report_file)
    }

    /// Default `tracing` filter directive.
    pub fn default_log_level(&self) -> &'static str {
        if self.dev_mode { "debug" } else { "info" }
    }
}

pub fn resolve_config(cfg: GavfindConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let url = overrides
        .url
        .or(cfg.url)
        .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());
    let url = normalize_url(&url)?;

    let retry = overrides
        .retries
        .or(cfg.retries)
        .map(RetryPolicy::new)
        .unwrap_or_default();

    let include = cfg
        .include
        .unwrap_or_else(|| vec![DEFAULT_INCLUDE.to_string()]);
    validate_globs(&include)?;

    let hash_name = cfg
        .hash_name
        .unwrap_or_else(|| ids::DEFAULT_HASH_NAME.to_string());
    if hash_name.trim().is_empty() {
        anyhow::bail!("hash_name must not be empty");
    }

    let out_dir = overrides
        .out_dir
        .or(cfg.out_dir)
        .unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());

    let maven_defaults = MavenProject::default();
    let maven = MavenProject {
        group_id: cfg.manifest.maven.group_id.unwrap_or(maven_defaults.group_id),
        artifact_id: cfg
            .manifest
            .maven
            .artifact_id
            .unwrap_or(maven_defaults.artifact_id),
        version: cfg.manifest.maven.version.unwrap_or(maven_defaults.version),
        name: cfg.manifest.maven.name.unwrap_or(maven_defaults.name),
    };

    let gradle_defaults = GradleProject::default();
    let gradle = GradleProject {
        group: cfg.manifest.gradle.group.unwrap_or(gradle_defaults.group),
        version: cfg.manifest.gradle.version.unwrap_or(gradle_defaults.version),
        configuration: cfg
            .manifest
            .gradle
            .configuration
            .unwrap_or(gradle_defaults.configuration),
    };

    let ant_defaults = AntProject::default();
    let ant = AntProject {
        name: cfg.manifest.ant.name.unwrap_or(ant_defaults.name),
        nexus_url: cfg.manifest.ant.nexus_url.unwrap_or(ant_defaults.nexus_url),
        tasks_version: cfg
            .manifest
            .ant
            .tasks_version
            .unwrap_or(ant_defaults.tasks_version),
    };

    Ok(ResolvedConfig {
        url,
        retry,
        scan_libs: cfg
            .scan_libs
            .unwrap_or_default()
            .into_iter()
            .map(Utf8PathBuf::from)
            .collect(),
        include,
        hash_name,
        hash_file: Utf8PathBuf::from(cfg.hash_file.unwrap_or_else(|| DEFAULT_HASH_FILE.to_string())),
        report_file: Utf8PathBuf::from(
            cfg.report_file
                .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string()),
        ),
        out_dir: Utf8PathBuf::from(out_dir),
        username: cfg.username,
        password: cfg.password,
        dev_mode: cfg.dev.dev_mode,
        maven,
        gradle,
        ant,
    })
}

/// Paths on the base URL are kept: `https://host/mirror` searches
/// `https://host/mirror/solrsearch/select`.
fn normalize_url(url: &str) -> anyhow::Result<String> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("url must not be empty");
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("invalid url: {url} (expected http:// or https://)");
    }
    if url.ends_with('/') {
        Ok(url.to_string())
    } else {
        Ok(format!("{url}/"))
    }
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid include glob: {pattern}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn resolve(toml: &str) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(toml)?, Overrides::default())
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg = resolve("").expect("resolve");
        assert_eq!(cfg.url, "https://search.maven.org/");
        assert_eq!(cfg.retry.retries, 3);
        assert!(cfg.scan_libs.is_empty());
        assert_eq!(cfg.include, vec!["**/*.jar"]);
        assert_eq!(cfg.hash_name, "sha1");
        assert_eq!(cfg.hash_path(), Utf8PathBuf::from("./lib-hash.csv"));
        assert_eq!(cfg.report_path(), Utf8PathBuf::from("./report.csv"));
        assert_eq!(cfg.default_log_level(), "info");
        assert_eq!(cfg.maven, MavenProject::default());
        assert_eq!(cfg.gradle, GradleProject::default());
        assert_eq!(cfg.ant, AntProject::default());
    }

    #[test]
    fn file_values_are_applied() {
        let cfg = resolve(
            r#"
url = "http://mirror.local/search"
retries = 5
scan_libs = ["libs", "vendor/app.jar"]
include = ["**/*.jar", "**/*.war"]
hash_name = "SHA-1"
hash_file = "hashes.csv"
report_file = "out.csv"
out_dir = "target/gav"
username = "scott"
password = "tiger"

[dev]
dev_mode = true

[manifest.maven]
group_id = "org.example"

[manifest.gradle]
configuration = "implementation"

[manifest.ant]
nexus_url = "https://nexus.example.com"
"#,
        )
        .expect("resolve");

        assert_eq!(cfg.url, "http://mirror.local/search/");
        assert_eq!(cfg.retry.max_attempts(), 6);
        assert_eq!(
            cfg.scan_libs,
            vec![Utf8PathBuf::from("libs"), Utf8PathBuf::from("vendor/app.jar")]
        );
        assert_eq!(cfg.include.len(), 2);
        assert_eq!(cfg.hash_name, "SHA-1");
        assert_eq!(cfg.hash_path(), Utf8PathBuf::from("target/gav/hashes.csv"));
        assert_eq!(cfg.report_path(), Utf8PathBuf::from("target/gav/out.csv"));
        assert_eq!(cfg.username.as_deref(), Some("scott"));
        assert_eq!(cfg.default_log_level(), "debug");
        assert_eq!(cfg.maven.group_id, "org.example");
        assert_eq!(cfg.maven.artifact_id, "mvn-sample");
        assert_eq!(cfg.gradle.configuration, "implementation");
        assert_eq!(cfg.ant.nexus_url, "https://nexus.example.com");
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = resolve_config(
            parse_config_toml("url = \"http://a.local\"\nretries = 5\nout_dir = \"x\"")
                .expect("parse"),
            Overrides {
                url: Some("http://b.local/".to_string()),
                retries: Some(0),
                out_dir: Some("y".to_string()),
            },
        )
        .expect("resolve");

        assert_eq!(cfg.url, "http://b.local/");
        assert_eq!(cfg.retry.max_attempts(), 1);
        assert_eq!(cfg.out_dir, Utf8PathBuf::from("y"));
    }

    #[test]
    fn out_dir_override_moves_relative_hash_file_too() {
        let cfg = resolve_config(
            parse_config_toml("").expect("parse"),
            Overrides {
                out_dir: Some("out".to_string()),
                ..Overrides::default()
            },
        )
        .expect("resolve");

        assert_eq!(cfg.hash_path(), Utf8PathBuf::from("out").join("lib-hash.csv"));
        assert_eq!(cfg.report_path(), Utf8PathBuf::from("out").join("report.csv"));
    }

    #[test]
    fn invalid_values_fail_resolution() {
        assert!(resolve("url = \"\"").is_err());
        assert!(resolve("url = \"ftp://host\"").is_err());
        assert!(resolve("include = [\"[\"]").is_err());
        assert!(resolve("hash_name = \" \"").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config_toml("urll = \"http://x\"").is_err());
        assert!(parse_config_toml("[dev]\nverbose = true").is_err());
    }
}
