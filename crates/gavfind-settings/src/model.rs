use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `gavfind.toml` schema v1.
///
/// Every field is optional; unset values fall back to built-in defaults during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GavfindConfigV1 {
    /// Optional schema string for tooling (`gavfind.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Base URL of the artifact search service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Extra attempts after a network failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,

    /// Files or directories scanned for libraries before resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_libs: Option<Vec<String>>,

    /// Globs selecting library files inside scanned directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,

    /// Header of the hash column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Basic-auth user for mirrors that require it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default)]
    pub dev: DevSection,

    #[serde(default)]
    pub manifest: ManifestSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DevSection {
    /// Raise the default log level to `debug`.
    #[serde(default)]
    pub dev_mode: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ManifestSection {
    #[serde(default)]
    pub maven: MavenSection,
    #[serde(default)]
    pub gradle: GradleSection,
    #[serde(default)]
    pub ant: AntSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MavenSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GradleSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Dependency configuration, e.g. `implementation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AntSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Nexus base URL hosting `maven-ant-tasks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nexus_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_version: Option<String>,
}
