use gavfind_types::{ArtifactIdentity, FoundMarker, HashRecord};

/// One line of the 7-column report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub file_name: String,
    pub hash: String,
    pub found: FoundMarker,
    pub found_with: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ReportRow {
    pub fn found(record: &HashRecord, identity: &ArtifactIdentity, found_with: &str) -> Self {
        Self {
            file_name: record.filename.clone(),
            hash: record.hash.clone(),
            found: FoundMarker::Found,
            found_with: found_with.to_string(),
            group_id: identity.group_id.clone(),
            artifact_id: identity.artifact_id.clone(),
            version: identity.version.clone(),
        }
    }

    /// A row with empty provenance and coordinates.
    pub fn unresolved(record: &HashRecord, marker: FoundMarker) -> Self {
        Self {
            file_name: record.filename.clone(),
            hash: record.hash.clone(),
            found: marker,
            found_with: String::new(),
            group_id: String::new(),
            artifact_id: String::new(),
            version: String::new(),
        }
    }
}

/// Project coordinates written into `pom.xml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MavenProject {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub name: String,
}

impl Default for MavenProject {
    fn default() -> Self {
        Self {
            group_id: "com.bcs.mvn.test".to_string(),
            artifact_id: "mvn-sample".to_string(),
            version: "1.0-SNAPSHOT".to_string(),
            name: "mvn-sample".to_string(),
        }
    }
}

/// Project settings written into `build.gradle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradleProject {
    pub group: String,
    pub version: String,
    /// Dependency configuration used for every entry.
    pub configuration: String,
}

impl Default for GradleProject {
    fn default() -> Self {
        Self {
            group: "com.bcs.gradle.test".to_string(),
            version: "1.0.0-SNAPSHOT".to_string(),
            configuration: "compile".to_string(),
        }
    }
}

/// Settings for the maven-ant-tasks based `build.xml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AntProject {
    pub name: String,
    /// Repository manager the maven-ant-tasks jar is downloaded from.
    pub nexus_url: String,
    pub tasks_version: String,
}

impl Default for AntProject {
    fn default() -> Self {
        Self {
            name: "ant-sample".to_string(),
            nexus_url: "http://nexus.mis.bcs:8081".to_string(),
            tasks_version: "2.1.3".to_string(),
        }
    }
}
